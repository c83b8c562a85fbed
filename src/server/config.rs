//! Armory configuration file.
//!
//! `ARMORY_CONFIG` (optionally set through `.env`) names a JSON file, `config.json` by
//! default. Every field has a default; fields absent from the file are logged so operators
//! notice incomplete files after upgrades.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::error::config::ConfigError;

const CONFIG_ENV: &str = "ARMORY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.json";

/// One game realm served by the armory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealmConfig {
    /// Display name, also used in URLs (matched case-insensitively).
    pub name: String,
    /// Realm id as stored in the auth database.
    pub realm_id: i32,
    /// Name of the auth database, used to look up game master accounts.
    pub auth_database: String,
    /// Connection URL of the realm's characters database.
    pub characters_database: String,
}

impl Default for RealmConfig {
    fn default() -> Self {
        Self {
            name: "Realm".to_string(),
            realm_id: 1,
            auth_database: "auth".to_string(),
            characters_database: "mysql://root@localhost:3306/characters".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub realms: Vec<RealmConfig>,
    /// Connection URL of the shared world database.
    pub world_database: String,
    /// Read every reference extract into memory at startup instead of per request.
    pub load_dbcs: bool,
    /// Hide characters of accounts with a game master level on the realm.
    pub hide_game_masters: bool,
    /// Per-query timeout in milliseconds.
    pub db_query_timeout: u64,
    pub listen_address: String,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub aowow_url: String,
    pub website_url: String,
    pub website_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            realms: Vec::new(),
            world_database: "mysql://root@localhost:3306/world".to_string(),
            load_dbcs: false,
            hide_game_masters: true,
            db_query_timeout: 10_000,
            listen_address: "0.0.0.0:48733".to_string(),
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
            aowow_url: String::new(),
            website_url: String::new(),
            website_name: "Armory".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration file named by `ARMORY_CONFIG`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed and validated configuration
    /// - `Err(ConfigError)` - The file is unreadable, malformed or fails validation
    pub async fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;

        tracing::info!("Loaded config from {}", path.display());

        Self::from_json(&text)
    }

    /// Parses and validates a configuration document.
    ///
    /// Missing fields fall back to their defaults and are reported with `tracing::warn!`.
    ///
    /// # Arguments
    /// - `text` - JSON document
    ///
    /// # Returns
    /// - `Ok(Config)` - Valid configuration
    /// - `Err(ConfigError)` - Malformed JSON, no realms, duplicate realm names or bad URLs
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(text)?;

        for field in missing_fields(&document) {
            tracing::warn!("Field {} is missing in config, using default", field);
        }

        let config: Config = serde_json::from_value(document)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.realms.is_empty() {
            return Err(ConfigError::NoRealms);
        }

        check_url("worldDatabase", &self.world_database)?;

        for (index, realm) in self.realms.iter().enumerate() {
            check_url(
                &format!("realms.{index}.charactersDatabase"),
                &realm.characters_database,
            )?;

            let duplicate = self.realms[..index]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&realm.name));
            if duplicate {
                return Err(ConfigError::DuplicateRealm(realm.name.clone()));
            }
        }

        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.db_query_timeout)
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidDatabaseUrl {
            field: field.to_string(),
            source,
        })
}

/// Dotted paths of fields the default document has but `document` lacks.
///
/// Each realm entry is compared against a default realm, so paths look like
/// `realms.0.authDatabase`.
pub fn missing_fields(document: &Value) -> Vec<String> {
    let template = Config {
        realms: vec![RealmConfig::default()],
        ..Config::default()
    };

    let mut missing = Vec::new();
    if let Ok(model) = serde_json::to_value(&template) {
        collect_missing(document, &model, "", &mut missing);
    }
    missing
}

fn collect_missing(value: &Value, model: &Value, parent: &str, missing: &mut Vec<String>) {
    let prefix = |key: &str| {
        if parent.is_empty() {
            key.to_string()
        } else {
            format!("{parent}.{key}")
        }
    };

    match (value, model) {
        (Value::Object(fields), Value::Object(model_fields)) => {
            for (key, model_value) in model_fields {
                match fields.get(key) {
                    Some(field) => collect_missing(field, model_value, &prefix(key), missing),
                    None => missing.push(prefix(key)),
                }
            }
        }
        (Value::Array(items), Value::Array(model_items)) => {
            if let Some(model_item) = model_items.first() {
                for (index, item) in items.iter().enumerate() {
                    collect_missing(item, model_item, &prefix(&index.to_string()), missing);
                }
            }
        }
        _ => {}
    }
}
