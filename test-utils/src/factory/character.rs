//! Character factory for creating test character rows.
//!
//! This module provides factory methods for creating characters with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .name("Alice")
///     .race(1)
///     .class(2)
///     .level(80)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::characters::Model,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - guid and account: auto-incremented id
    /// - name: `"Character{id}"`
    /// - race 1 (human), class 1 (warrior), gender 0, level 80
    /// - offline, no kills, not deleted, all appearance fields 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: entity::characters::Model {
                guid: id,
                account: id,
                name: format!("Character{}", id),
                race: 1,
                class: 1,
                gender: 0,
                level: 80,
                skin: 0,
                face: 0,
                hair_style: 0,
                hair_color: 0,
                facial_style: 0,
                player_flags: 0,
                online: 0,
                total_kills: 0,
                today_kills: 0,
                yesterday_kills: 0,
                delete_infos_account: None,
            },
        }
    }

    /// Sets the character guid.
    ///
    /// # Arguments
    /// - `guid` - Primary key of the character
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guid(mut self, guid: u32) -> Self {
        self.model.guid = guid;
        self
    }

    /// Sets the owning account.
    ///
    /// # Arguments
    /// - `account` - Account id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn account(mut self, account: u32) -> Self {
        self.model.account = account;
        self
    }

    /// Sets the character name.
    ///
    /// # Arguments
    /// - `name` - Character name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn race(mut self, race: u8) -> Self {
        self.model.race = race;
        self
    }

    pub fn class(mut self, class: u8) -> Self {
        self.model.class = class;
        self
    }

    pub fn gender(mut self, gender: u8) -> Self {
        self.model.gender = gender;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.model.level = level;
        self
    }

    /// Sets the appearance columns.
    ///
    /// # Arguments
    /// - `skin`, `face`, `hair_style`, `hair_color`, `facial_style` - Appearance indexes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn appearance(
        mut self,
        skin: u8,
        face: u8,
        hair_style: u8,
        hair_color: u8,
        facial_style: u8,
    ) -> Self {
        self.model.skin = skin;
        self.model.face = face;
        self.model.hair_style = hair_style;
        self.model.hair_color = hair_color;
        self.model.facial_style = facial_style;
        self
    }

    pub fn online(mut self, online: bool) -> Self {
        self.model.online = online as u8;
        self
    }

    /// Sets the honorable kill counters.
    ///
    /// # Arguments
    /// - `total` - Lifetime kills
    /// - `today` - Kills today
    /// - `yesterday` - Kills yesterday
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn kills(mut self, total: u32, today: u16, yesterday: u16) -> Self {
        self.model.total_kills = total;
        self.model.today_kills = today;
        self.model.yesterday_kills = yesterday;
        self
    }

    /// Marks the character as deleted by the given account.
    pub fn deleted(mut self) -> Self {
        self.model.delete_infos_account = Some(self.model.account);
        self
    }

    /// Builds and inserts the character into the database.
    ///
    /// # Returns
    /// - `Ok(entity::characters::Model)` - Created character
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::characters::Model, DbErr> {
        entity::characters::ActiveModel::from(self.model)
            .reset_all()
            .insert(self.db)
            .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::characters::Model)` - Created character
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::characters::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

/// Creates a character with a specific name.
///
/// Shorthand for `CharacterFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Character name
///
/// # Returns
/// - `Ok(entity::characters::Model)` - Created character
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::characters::Model, DbErr> {
    CharacterFactory::new(db).name(name).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_character_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Characters)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = create_character(db).await?;

        assert!(character.name.starts_with("Character"));
        assert_eq!(character.level, 80);
        assert_eq!(character.online, 0);
        assert!(character.delete_infos_account.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_character_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Characters)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = CharacterFactory::new(db)
            .name("Alice")
            .race(4)
            .class(11)
            .gender(1)
            .online(true)
            .kills(120, 3, 7)
            .deleted()
            .build()
            .await?;

        assert_eq!(character.name, "Alice");
        assert_eq!(character.race, 4);
        assert_eq!(character.class, 11);
        assert_eq!(character.gender, 1);
        assert_eq!(character.online, 1);
        assert_eq!(character.total_kills, 120);
        assert_eq!(character.delete_infos_account, Some(character.account));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_characters() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Characters)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_character(db).await?;
        let second = create_character(db).await?;

        assert_ne!(first.guid, second.guid);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
