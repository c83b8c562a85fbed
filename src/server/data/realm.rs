use std::time::Duration;

use sea_orm::{DatabaseBackend, DatabaseConnection};

use crate::server::{error::query::QueryError, util::query::query_one};

/// Queries about a realm's characters database itself.
pub struct RealmRepository<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> RealmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Gets the default character set of the connected database.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Character set name, e.g. `utf8mb4`
    /// - `Ok(None)` - The backend is not MySQL and has no character set setting
    /// - `Err(QueryError)` - Query failed or timed out
    pub async fn get_charset(&self) -> Result<Option<String>, QueryError> {
        if self.db.get_database_backend() != DatabaseBackend::MySql {
            return Ok(None);
        }

        let row = query_one(
            self.db,
            self.timeout,
            "SELECT @@character_set_database AS `charset`",
            Vec::new(),
        )
        .await?;

        match row {
            Some(row) => Ok(row.try_get::<Option<String>>("", "charset")?),
            None => Ok(None),
        }
    }
}
