use std::collections::BTreeMap;

use crate::{
    model::guild::{GuildDto, GuildMembersDto},
    server::{
        data::guild::GuildRepository,
        error::AppError,
        model::guild::GuildPage,
        service::grid::{class_column, hide_game_masters, name_column, online_column, race_column},
        ssp::{
            builder::ServerSideProcessor,
            column::{ColumnSpec, JoinKind, JoinSpec},
            request::SspRequest,
        },
        state::{AppState, Realm},
        util::html::escape,
    },
};

/// Position of the raw gender cell in member grid rows.
const MEMBER_GENDER_INDEX: usize = 6;

pub struct GuildService<'a> {
    state: &'a AppState,
    realm: &'a Realm,
}

impl<'a> GuildService<'a> {
    pub fn new(state: &'a AppState, realm: &'a Realm) -> Self {
        Self { state, realm }
    }

    fn repository(&self) -> GuildRepository<'a> {
        GuildRepository::new(&self.realm.db, self.state.query_timeout())
    }

    /// Gets the guild page by exact guild name.
    ///
    /// # Arguments
    /// - `name` - Guild name
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - Guild with leader, faction, emblem and member count
    /// - `Err(AppError::NotFound)` - No guild with that name
    /// - `Err(AppError)` - Query failed or timed out
    pub async fn get_guild(&self, name: &str) -> Result<GuildDto, AppError> {
        let repo = self.repository();

        let guild = repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", name)))?;
        let leader = repo.find_leader(&guild).await?;
        let members_count = repo.count_members(guild.guildid).await?;

        Ok(GuildPage {
            guild,
            leader,
            members_count,
        }
        .into_dto(self.realm.name()))
    }

    /// Gets one page of the guild's member grid together with its rank names.
    ///
    /// Deleted characters are never listed; game masters are hidden when configured.
    ///
    /// # Arguments
    /// - `guild_id` - Guild id
    /// - `request` - Grid paging, sorting and search parameters
    ///
    /// # Returns
    /// - `Ok(GuildMembersDto)` - Grid page with HTML-escaped rank names
    /// - `Err(AppError::NotFound)` - The guild does not exist
    /// - `Err(AppError)` - Invalid grid request or failed query
    pub async fn get_members(
        &self,
        guild_id: u32,
        request: &SspRequest,
    ) -> Result<GuildMembersDto, AppError> {
        let repo = self.repository();
        let timeout = self.state.query_timeout();

        if !repo.exists(guild_id).await? {
            return Err(AppError::NotFound(format!("Guild {} not found", guild_id)));
        }

        let collation = self.state.charsets.collation(self.realm, timeout).await?;

        let mut grid = ServerSideProcessor::new(
            "guild_member",
            "guid",
            vec![
                name_column(collation),
                ColumnSpec::new("rank"),
                ColumnSpec::new("level").table("characters"),
                class_column(),
                race_column(MEMBER_GENDER_INDEX),
                online_column(),
            ],
        )
        .join(JoinSpec::new(
            JoinKind::Left,
            "guild_member",
            "guid",
            "characters",
            "guid",
        ))
        .extra_data_column("`characters`.`gender`");

        if let Some(filter) = self.state.game_master_filter(self.realm) {
            grid = hide_game_masters(grid, &filter);
        }

        let grid = grid
            .and_where_bound("`guild_member`.`guildid` = ?", guild_id)
            .and_where("`characters`.`deleteInfos_Account` IS NULL")
            .run(&self.realm.db, request, timeout)
            .await?;

        let ranks: BTreeMap<u8, String> = repo
            .get_ranks(guild_id)
            .await?
            .into_iter()
            .map(|rank| (rank.rid, escape(&rank.rname)))
            .collect();

        Ok(GuildMembersDto { grid, ranks })
    }
}
