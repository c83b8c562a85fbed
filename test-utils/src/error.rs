use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Writing fixture files failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing a fixture document failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
