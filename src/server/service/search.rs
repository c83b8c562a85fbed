use crate::{
    model::search::SearchDto,
    server::{
        error::AppError,
        service::grid::{class_column, hide_game_masters, name_column, race_column},
        ssp::{
            builder::ServerSideProcessor,
            column::{ColumnSpec, JoinKind, JoinSpec},
            request::SspRequest,
        },
        state::AppState,
    },
};

/// Position of the raw gender cell in search grid rows.
const SEARCH_GENDER_INDEX: usize = 5;

pub struct SearchService<'a> {
    state: &'a AppState,
}

impl<'a> SearchService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Searches the characters of a realm.
    ///
    /// Deleted characters are never listed; game masters are hidden when configured. The
    /// search term matches character and guild names.
    ///
    /// # Arguments
    /// - `realm` - Realm name, the first configured realm when absent
    /// - `request` - Grid paging, sorting and search parameters
    ///
    /// # Returns
    /// - `Ok(SearchDto)` - Grid page echoing the realm
    /// - `Err(AppError::BadRequest)` - Unknown realm or invalid grid request
    /// - `Err(AppError)` - Query failed or timed out
    pub async fn search_characters(
        &self,
        realm: Option<&str>,
        request: &SspRequest,
    ) -> Result<SearchDto, AppError> {
        let realm = match realm {
            Some(name) => self.state.realms.get(name),
            None => self.state.realms.first(),
        }
        .ok_or_else(|| AppError::BadRequest(format!("Unknown realm {:?}", realm)))?;

        let timeout = self.state.query_timeout();
        let collation = self.state.charsets.collation(realm, timeout).await?;

        let mut grid = ServerSideProcessor::new(
            "characters",
            "guid",
            vec![
                name_column(collation.clone()),
                ColumnSpec::new("level"),
                class_column(),
                race_column(SEARCH_GENDER_INDEX),
                ColumnSpec::new("name").table("guild").collation(collation),
            ],
        )
        .join(JoinSpec::new(
            JoinKind::Left,
            "characters",
            "guid",
            "guild_member",
            "guid",
        ))
        .join(JoinSpec::new(
            JoinKind::Left,
            "guild_member",
            "guildid",
            "guild",
            "guildid",
        ))
        .extra_data_column("`characters`.`gender`");

        if let Some(filter) = self.state.game_master_filter(realm) {
            grid = hide_game_masters(grid, &filter);
        }

        let grid = grid
            .and_where("`characters`.`deleteInfos_Account` IS NULL")
            .run(&realm.db, request, timeout)
            .await?;

        Ok(SearchDto {
            grid,
            realm: realm.name().to_string(),
        })
    }
}
