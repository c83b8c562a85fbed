//! Guild factory for creating guilds, memberships and ranks.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// The leader is only stored as a guid; create the leader character first when the
/// test reads it back through a join.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .name("Knights")
///     .leader(leader.guid)
///     .emblem(3, 5, 1, 2, 7)
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::guild::Model,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guildid: auto-incremented id
    /// - name: `"Guild {id}"`
    /// - leaderguid: 0
    /// - emblem: all style and color ids 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::guild::Model {
                guildid: id,
                name: format!("Guild {}", id),
                leaderguid: 0,
                emblem_style: 0,
                emblem_color: 0,
                border_style: 0,
                border_color: 0,
                background_color: 0,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn leader(mut self, leaderguid: u32) -> Self {
        self.model.leaderguid = leaderguid;
        self
    }

    /// Sets the emblem columns.
    ///
    /// # Arguments
    /// - `emblem_style` - Icon image id
    /// - `emblem_color` - Icon color id
    /// - `border_style` - Border image id
    /// - `border_color` - Border color id
    /// - `background_color` - Background color id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn emblem(
        mut self,
        emblem_style: u8,
        emblem_color: u8,
        border_style: u8,
        border_color: u8,
        background_color: u8,
    ) -> Self {
        self.model.emblem_style = emblem_style;
        self.model.emblem_color = emblem_color;
        self.model.border_style = border_style;
        self.model.border_color = border_color;
        self.model.background_color = background_color;
        self
    }

    /// Builds and inserts the guild into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel::from(self.model)
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a guild with default values and no leader row.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guild::Model)` - Created guild
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}

/// Adds a character to a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guildid` - Existing guild id
/// - `guid` - Existing character guid
/// - `rank` - Rank id within the guild
///
/// # Returns
/// - `Ok(entity::guild_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_member(
    db: &DatabaseConnection,
    guildid: u32,
    guid: u32,
    rank: u8,
) -> Result<entity::guild_member::Model, DbErr> {
    entity::guild_member::ActiveModel {
        guildid: ActiveValue::Set(guildid),
        guid: ActiveValue::Set(guid),
        rank: ActiveValue::Set(rank),
    }
    .insert(db)
    .await
}

/// Adds a named rank to a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guildid` - Existing guild id
/// - `rid` - Rank id
/// - `name` - Rank display name
///
/// # Returns
/// - `Ok(entity::guild_rank::Model)` - Created rank
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_rank(
    db: &DatabaseConnection,
    guildid: u32,
    rid: u8,
    name: impl Into<String>,
) -> Result<entity::guild_rank::Model, DbErr> {
    entity::guild_rank::ActiveModel {
        guildid: ActiveValue::Set(guildid),
        rid: ActiveValue::Set(rid),
        rname: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}
