//! Armory Test Utils
//!
//! Provides shared testing utilities for the armory. This crate offers a builder pattern
//! for creating test contexts backed by in-memory SQLite databases shaped like the game
//! server's characters and world schemas, row factories for those tables, and fixtures
//! writing reference data extracts to temporary directories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//! - **fixture**: Reference data extracts and customization documents on disk
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_character() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let character = factory::character::create_character(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
