use std::{collections::HashMap, time::Duration};

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{error::query::QueryError, util::query::with_timeout};

/// Reads item templates from the shared world database.
pub struct ItemTemplateRepository<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> ItemTemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Maps every item with a socket bonus to its bonus enchantment id.
    pub async fn get_socket_bonuses(&self) -> Result<HashMap<i64, i64>, QueryError> {
        let items = with_timeout(
            self.timeout,
            entity::prelude::ItemTemplate::find()
                .filter(entity::item_template::Column::SocketBonus.ne(0))
                .all(self.db),
        )
        .await?;

        Ok(items
            .into_iter()
            .map(|item| (i64::from(item.entry), i64::from(item.socket_bonus)))
            .collect())
    }
}
