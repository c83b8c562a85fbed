use std::time::Duration;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::server::{error::query::QueryError, util::query::with_timeout};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Finds a guild by its exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::guild::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::Guild::find()
                .filter(entity::guild::Column::Name.eq(name))
                .one(self.db),
        )
        .await
    }

    pub async fn exists(&self, guild_id: u32) -> Result<bool, QueryError> {
        let count = with_timeout(
            self.timeout,
            entity::prelude::Guild::find()
                .filter(entity::guild::Column::Guildid.eq(guild_id))
                .count(self.db),
        )
        .await?;

        Ok(count > 0)
    }

    pub async fn find_leader(
        &self,
        guild: &entity::guild::Model,
    ) -> Result<Option<entity::characters::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::Characters::find_by_id(guild.leaderguid).one(self.db),
        )
        .await
    }

    /// Counts every member of the guild, game masters and deleted characters included.
    pub async fn count_members(&self, guild_id: u32) -> Result<u64, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::GuildMember::find()
                .filter(entity::guild_member::Column::Guildid.eq(guild_id))
                .count(self.db),
        )
        .await
    }

    /// Gets the rank definitions of a guild ordered by rank id.
    pub async fn get_ranks(&self, guild_id: u32) -> Result<Vec<entity::guild_rank::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::GuildRank::find()
                .filter(entity::guild_rank::Column::Guildid.eq(guild_id))
                .order_by_asc(entity::guild_rank::Column::Rid)
                .all(self.db),
        )
        .await
    }
}
