use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use tempfile::TempDir;
use test_utils::fixture::dbc::{reference_data, ENCHANT_SOCKET_BONUS, ITEM_SWORD};

use crate::server::{
    config::{Config, RealmConfig},
    dbc::{catalog::DbcCatalog, customization::CustomizationCatalog},
    service::character::lookups::CharacterLookups,
    ssp::request::SspRequest,
    state::{AppState, Realm},
};

mod arena;
mod character;
mod guild;
mod search;

pub const REALM: &str = "Icecrown";
pub const REALM_ID: i32 = 1;

/// Application state over one test database and the reference data fixtures.
pub struct TestArmory {
    pub state: AppState,
    /// Keeps the streamed reference data alive for the state's lifetime.
    _data: TempDir,
}

impl TestArmory {
    pub fn realm(&self) -> &Realm {
        self.state.realms.get(REALM).unwrap()
    }
}

/// Builds application state with a single realm backed by `db`.
///
/// SQLite exposes the in-memory database as schema `main`, which stands in for the realm's
/// auth database.
pub async fn armory(db: &DatabaseConnection, hide_game_masters: bool) -> TestArmory {
    let data = reference_data().unwrap();

    let config = Config {
        realms: vec![RealmConfig {
            name: REALM.to_string(),
            realm_id: REALM_ID,
            auth_database: "main".to_string(),
            ..RealmConfig::default()
        }],
        hide_game_masters,
        data_dir: data.path().to_path_buf(),
        website_name: "Test Armory".to_string(),
        ..Config::default()
    };
    let realms = vec![Realm::new(config.realms[0].clone(), db.clone())];

    let dbc = DbcCatalog::new(data.path());
    let customization = CustomizationCatalog::load(data.path()).await.unwrap();
    let bonuses = HashMap::from([(ITEM_SWORD as i64, ENCHANT_SOCKET_BONUS as i64)]);
    let lookups = CharacterLookups::build(&dbc, bonuses).await.unwrap();

    TestArmory {
        state: AppState::new(config, realms, dbc, customization, lookups),
        _data: data,
    }
}

/// Grid request from query string pairs.
pub fn grid_request(pairs: &[(&str, &str)]) -> SspRequest {
    SspRequest::from_pairs(pairs.iter().copied()).unwrap()
}
