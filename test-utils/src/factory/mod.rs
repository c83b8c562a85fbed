//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating rows of the game server's characters
//! and world schemas with sensible defaults, reducing boilerplate in tests. Parent rows must
//! exist before children are inserted (SQLite enforces the entity foreign keys), so the
//! helpers take the parent ids explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let character = factory::character::create_character(&db).await?;
//!
//!     // Create a guild led by a new character
//!     let (leader, guild) = factory::helpers::create_guild_with_leader(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let character = factory::character::CharacterFactory::new(&db)
//!     .name("Alice")
//!     .race(4)
//!     .class(11)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create account access (game master) rows
//! - `arena_team` - Create arena teams and their members
//! - `character` - Create characters
//! - `guild` - Create guilds, members and ranks
//! - `item` - Create equipped items and world item templates
//! - `progress` - Create learned spells, talents, glyphs and achievements
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod arena_team;
pub mod character;
pub mod guild;
pub mod helpers;
pub mod item;
pub mod progress;

// Re-export commonly used factory functions for concise usage
pub use arena_team::{create_arena_team, create_arena_team_member};
pub use character::{create_character, create_character_named};
pub use guild::{create_guild, create_guild_member, create_guild_rank};
pub use item::{create_equipped_item, create_item_template};
