use crate::{
    model::arena::{ArenaIndexDto, ArenaTeamDto, LadderDto},
    server::{
        data::arena_team::ArenaTeamRepository,
        error::AppError,
        model::arena::{ArenaTeam, TEAM_SIZES},
        ssp::{builder::ServerSideProcessor, column::ColumnSpec, request::SspRequest},
        state::{AppState, Realm},
    },
};

pub struct ArenaService<'a> {
    state: &'a AppState,
}

impl<'a> ArenaService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Ladder landing page listing the realms to pick from.
    pub fn get_index(&self) -> ArenaIndexDto {
        ArenaIndexDto {
            title: "Arena Ladder".to_string(),
            realms: self.state.realms.names(),
        }
    }

    /// Gets one page of a realm's ladder for a team size.
    ///
    /// # Arguments
    /// - `realm` - Realm name, the first configured realm when absent
    /// - `team_size` - Raw `teamsize` parameter; must be 2, 3 or 5
    /// - `request` - Grid paging, sorting and search parameters
    ///
    /// # Returns
    /// - `Ok(LadderDto)` - Grid page echoing the realm and team size
    /// - `Err(AppError::BadRequest)` - Unknown realm or invalid team size
    /// - `Err(AppError)` - Invalid grid request or failed query
    pub async fn get_ladder(
        &self,
        realm: Option<&str>,
        team_size: Option<&str>,
        request: &SspRequest,
    ) -> Result<LadderDto, AppError> {
        let realm = match realm {
            Some(name) => self.state.realms.get(name),
            None => self.state.realms.first(),
        }
        .ok_or_else(|| AppError::BadRequest(format!("Unknown realm {:?}", realm)))?;

        let team_size = team_size
            .and_then(|size| size.trim().parse::<u8>().ok())
            .filter(|size| TEAM_SIZES.contains(size))
            .ok_or_else(|| AppError::BadRequest(format!("Invalid team size {:?}", team_size)))?;

        let timeout = self.state.query_timeout();
        let collation = self.state.charsets.collation(realm, timeout).await?;

        let grid = ServerSideProcessor::new(
            "arena_team",
            "arenaTeamId",
            vec![
                ColumnSpec::new("name").collation(collation),
                ColumnSpec::new("rating"),
                ColumnSpec::new("seasonWins"),
                ColumnSpec::new("seasonGames"),
            ],
        )
        .and_where_bound("`arena_team`.`type` = ?", team_size)
        .run(&realm.db, request, timeout)
        .await?;

        Ok(LadderDto {
            grid,
            realm: realm.name().to_string(),
            team_size,
        })
    }

    /// Gets an arena team page by exact team name.
    ///
    /// # Returns
    /// - `Ok(ArenaTeamDto)` - Team stats, emblem and members
    /// - `Err(AppError::NotFound)` - No team with that name
    /// - `Err(AppError)` - Query failed or timed out
    pub async fn get_team(&self, realm: &Realm, name: &str) -> Result<ArenaTeamDto, AppError> {
        let repo = ArenaTeamRepository::new(&realm.db, self.state.query_timeout());

        let team = repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Arena team {} not found", name)))?;
        let members = repo.get_members(team.arena_team_id).await?;

        Ok(ArenaTeam { team, members }.into_dto(realm.name()))
    }
}
