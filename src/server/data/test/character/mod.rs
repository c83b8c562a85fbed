use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::TIMEOUT;
use crate::server::{
    data::character::CharacterRepository,
    model::{character::CharacterKey, realm::GameMasterFilter},
};

mod find;
mod get_arena_teams;
mod get_equipment;
mod get_kills;
mod get_learned_spells;
mod get_progress;

/// SQLite exposes the in-memory database as schema `main`, standing in for the auth database.
fn game_masters(realm_id: i32) -> GameMasterFilter {
    GameMasterFilter {
        auth_database: "main".to_string(),
        realm_id,
    }
}
