use std::time::Duration;

use sea_orm::{DatabaseConnection, DbErr};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::ssp::{
    builder::ServerSideProcessor,
    column::{ColumnSpec, JoinKind, JoinSpec},
    request::SspRequest,
};


const TIMEOUT: Duration = Duration::from_secs(5);

/// Grid over character names with one searchable, orderable column.
fn names_grid() -> ServerSideProcessor {
    ServerSideProcessor::new("characters", "guid", vec![ColumnSpec::new("name")])
}

fn request(pairs: &[(&str, &str)]) -> SspRequest {
    SspRequest::from_pairs(pairs.iter().copied()).unwrap()
}

/// Inserts characters with explicit guids in the given order.
async fn create_named(db: &DatabaseConnection, rows: &[(u32, &str)]) -> Result<(), DbErr> {
    for (guid, name) in rows {
        factory::character::CharacterFactory::new(db)
            .guid(*guid)
            .account(*guid)
            .name(*name)
            .build()
            .await?;
    }
    Ok(())
}
