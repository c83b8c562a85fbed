//! Arena team factory for creating teams and their members.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test arena teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::arena_team::ArenaTeamFactory;
///
/// let team = ArenaTeamFactory::new(&db)
///     .name("Gladiators")
///     .team_type(3)
///     .rating(2200)
///     .build()
///     .await?;
/// ```
pub struct ArenaTeamFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::arena_team::Model,
}

impl<'a> ArenaTeamFactory<'a> {
    /// Creates a new ArenaTeamFactory with default values.
    ///
    /// Defaults:
    /// - arenaTeamId: auto-incremented id
    /// - name: `"Team {id}"`
    /// - type 2, rating 1500, no games played, captain 0, emblem zeroed
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ArenaTeamFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::arena_team::Model {
                arena_team_id: id,
                name: format!("Team {}", id),
                captain_guid: 0,
                r#type: 2,
                rating: 1500,
                season_games: 0,
                season_wins: 0,
                week_games: 0,
                week_wins: 0,
                background_color: 0,
                emblem_style: 0,
                emblem_color: 0,
                border_style: 0,
                border_color: 0,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn captain(mut self, captain_guid: u32) -> Self {
        self.model.captain_guid = captain_guid;
        self
    }

    /// Sets the team size (2, 3 or 5).
    pub fn team_type(mut self, team_type: u8) -> Self {
        self.model.r#type = team_type;
        self
    }

    pub fn rating(mut self, rating: u16) -> Self {
        self.model.rating = rating;
        self
    }

    /// Sets the season and week records.
    ///
    /// # Arguments
    /// - `season_games`, `season_wins` - Season record
    /// - `week_games`, `week_wins` - Current week record
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn record(
        mut self,
        season_games: u16,
        season_wins: u16,
        week_games: u16,
        week_wins: u16,
    ) -> Self {
        self.model.season_games = season_games;
        self.model.season_wins = season_wins;
        self.model.week_games = week_games;
        self.model.week_wins = week_wins;
        self
    }

    /// Sets the emblem columns; colors are ARGB integers.
    pub fn emblem(
        mut self,
        background_color: u32,
        emblem_style: u8,
        emblem_color: u32,
        border_style: u8,
        border_color: u32,
    ) -> Self {
        self.model.background_color = background_color;
        self.model.emblem_style = emblem_style;
        self.model.emblem_color = emblem_color;
        self.model.border_style = border_style;
        self.model.border_color = border_color;
        self
    }

    /// Builds and inserts the arena team into the database.
    ///
    /// # Returns
    /// - `Ok(entity::arena_team::Model)` - Created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::arena_team::Model, DbErr> {
        entity::arena_team::ActiveModel::from(self.model)
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a 2v2 arena team with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::arena_team::Model)` - Created team
/// - `Err(DbErr)` - Database error during insert
pub async fn create_arena_team(db: &DatabaseConnection) -> Result<entity::arena_team::Model, DbErr> {
    ArenaTeamFactory::new(db).build().await
}

/// Adds a character to an arena team with an empty record and 1500 personal rating.
///
/// # Arguments
/// - `db` - Database connection
/// - `arena_team_id` - Existing team id
/// - `guid` - Existing character guid
///
/// # Returns
/// - `Ok(entity::arena_team_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_arena_team_member(
    db: &DatabaseConnection,
    arena_team_id: u32,
    guid: u32,
) -> Result<entity::arena_team_member::Model, DbErr> {
    entity::arena_team_member::ActiveModel {
        arena_team_id: ActiveValue::Set(arena_team_id),
        guid: ActiveValue::Set(guid),
        week_games: ActiveValue::Set(0),
        week_wins: ActiveValue::Set(0),
        season_games: ActiveValue::Set(0),
        season_wins: ActiveValue::Set(0),
        personal_rating: ActiveValue::Set(1500),
    }
    .insert(db)
    .await
}
