use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    ///
    /// `ARMORY_CONFIG` names the file, defaulting to `config.json` in the working directory.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or has fields of the wrong type.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// No realm is configured; the armory has nothing to serve.
    #[error("Config does not define any realm")]
    NoRealms,

    /// A database connection string is not a valid URL.
    #[error("Invalid database URL in {field}: {source}")]
    InvalidDatabaseUrl {
        field: String,
        #[source]
        source: url::ParseError,
    },

    /// Two realms share the same name (compared case-insensitively).
    #[error("Realm {0} is configured more than once")]
    DuplicateRealm(String),
}
