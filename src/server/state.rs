//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The configured realms with their characters database pools
//! - The reference data catalog and the customization catalog
//! - Lookup tables precomputed from reference data at startup
//! - The per-realm character set cache used to pick search collations

use std::{collections::HashMap, sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::{
    config::{Config, RealmConfig},
    data::realm::RealmRepository,
    dbc::{catalog::DbcCatalog, customization::CustomizationCatalog},
    error::query::QueryError,
    model::realm::GameMasterFilter,
    service::character::lookups::CharacterLookups,
};

/// A configured realm and its characters database.
#[derive(Clone)]
pub struct Realm {
    pub config: RealmConfig,
    /// Connection pool of the realm's characters database.
    pub db: DatabaseConnection,
}

impl Realm {
    pub fn new(config: RealmConfig, db: DatabaseConnection) -> Self {
        Self { config, db }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Game master filter of this realm when game masters are hidden.
    ///
    /// # Arguments
    /// - `hide` - Value of the `hideGameMasters` setting
    ///
    /// # Returns
    /// - `Some(GameMasterFilter)` - Filter against the realm's auth database
    /// - `None` - Game masters are shown
    pub fn game_master_filter(&self, hide: bool) -> Option<GameMasterFilter> {
        hide.then(|| GameMasterFilter {
            auth_database: self.config.auth_database.clone(),
            realm_id: self.config.realm_id,
        })
    }
}

/// Realms in configuration order, looked up by name case-insensitively.
pub struct RealmRegistry {
    realms: Vec<Realm>,
}

impl RealmRegistry {
    pub fn new(realms: Vec<Realm>) -> Self {
        Self { realms }
    }

    pub fn get(&self, name: &str) -> Option<&Realm> {
        self.realms
            .iter()
            .find(|realm| realm.name().eq_ignore_ascii_case(name))
    }

    /// First configured realm, used when a request names none.
    pub fn first(&self) -> Option<&Realm> {
        self.realms.first()
    }

    pub fn names(&self) -> Vec<String> {
        self.realms.iter().map(|realm| realm.name().to_string()).collect()
    }
}

/// Read-through cache of each realm's database character set.
///
/// Two requests may populate the same realm concurrently; both compute the same value so
/// the last write wins.
#[derive(Clone, Default)]
pub struct CharsetCache {
    charsets: Arc<RwLock<HashMap<String, Option<String>>>>,
}

impl CharsetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the search collation of a realm, querying its charset on first use.
    ///
    /// # Arguments
    /// - `realm` - Realm whose characters database is queried
    /// - `timeout` - Query timeout
    ///
    /// # Returns
    /// - `Ok(Some(String))` - `<charset>_general_ci`
    /// - `Ok(None)` - The database reports no charset; no collation is applied
    /// - `Err(QueryError)` - Charset query failed or timed out
    pub async fn collation(
        &self,
        realm: &Realm,
        timeout: Duration,
    ) -> Result<Option<String>, QueryError> {
        let key = realm.name().to_lowercase();

        let cached = self.charsets.read().await.get(&key).cloned();
        let charset = match cached {
            Some(charset) => charset,
            None => {
                let charset = RealmRepository::new(&realm.db, timeout).get_charset().await?;
                tracing::debug!("Character set of realm {} is {:?}", realm.name(), charset);

                self.charsets.write().await.insert(key, charset.clone());
                charset
            }
        };

        Ok(charset.map(|charset| format!("{charset}_general_ci")))
    }

    /// Number of realms with a cached charset.
    pub async fn len(&self) -> usize {
        self.charsets.read().await.len()
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types: the catalogs and lookups are behind `Arc`, the
/// realm pools are shared by the registry and the charset cache shares its map.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub realms: Arc<RealmRegistry>,
    pub dbc: Arc<DbcCatalog>,
    pub customization: Arc<CustomizationCatalog>,
    pub lookups: Arc<CharacterLookups>,
    pub charsets: CharsetCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    /// - `realms` - Connected realms in configuration order
    /// - `dbc` - Reference data catalog, already loaded when `loadDbcs` is set
    /// - `customization` - Character customization documents
    /// - `lookups` - Lookup tables built from the reference data
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        config: Config,
        realms: Vec<Realm>,
        dbc: DbcCatalog,
        customization: CustomizationCatalog,
        lookups: CharacterLookups,
    ) -> Self {
        Self {
            config: Arc::new(config),
            realms: Arc::new(RealmRegistry::new(realms)),
            dbc: Arc::new(dbc),
            customization: Arc::new(customization),
            lookups: Arc::new(lookups),
            charsets: CharsetCache::new(),
        }
    }

    pub fn query_timeout(&self) -> Duration {
        self.config.query_timeout()
    }

    /// Game master filter of a realm according to `hideGameMasters`.
    pub fn game_master_filter(&self, realm: &Realm) -> Option<GameMasterFilter> {
        realm.game_master_filter(self.config.hide_game_masters)
    }
}
