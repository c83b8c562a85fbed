use std::time::Duration;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    error::query::QueryError, model::arena::ArenaTeamMember, util::query::with_timeout,
};

pub struct ArenaTeamRepository<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> ArenaTeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::arena_team::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::ArenaTeam::find()
                .filter(entity::arena_team::Column::Name.eq(name))
                .one(self.db),
        )
        .await
    }

    /// Gets the members of a team with their characters.
    ///
    /// Members whose character row no longer exists are left out.
    pub async fn get_members(&self, team_id: u32) -> Result<Vec<ArenaTeamMember>, QueryError> {
        let rows = with_timeout(
            self.timeout,
            entity::prelude::ArenaTeamMember::find()
                .filter(entity::arena_team_member::Column::ArenaTeamId.eq(team_id))
                .find_also_related(entity::prelude::Characters)
                .order_by_asc(entity::arena_team_member::Column::Guid)
                .all(self.db),
        )
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, character)| {
                character.map(|character| ArenaTeamMember { member, character })
            })
            .collect())
    }
}
