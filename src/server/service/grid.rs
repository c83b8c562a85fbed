//! Grid columns shared by the character listings.

use serde_json::Value;

use crate::server::{
    model::realm::GameMasterFilter,
    ssp::{
        builder::ServerSideProcessor,
        column::{ColumnSpec, JoinKind, JoinSpec},
    },
    util::game::{class_name, gender_name, race_name},
};

fn small(value: &Value) -> Option<u8> {
    value.as_u64().and_then(|value| u8::try_from(value).ok())
}

/// Character name, compared with the realm's collation when searching.
pub fn name_column(collation: Option<String>) -> ColumnSpec {
    ColumnSpec::new("name").table("characters").collation(collation)
}

/// Class id rendered as the file-name style class name.
pub fn class_column() -> ColumnSpec {
    ColumnSpec::new("class")
        .table("characters")
        .formatter(|class, _| {
            small(class)
                .and_then(class_name)
                .map(Value::from)
                .unwrap_or(Value::Null)
        })
}

/// Race id rendered as `<race>_<gender>`, reading the gender from another cell of the row.
///
/// # Arguments
/// - `gender_index` - Position of the raw gender cell in the row
pub fn race_column(gender_index: usize) -> ColumnSpec {
    ColumnSpec::new("race")
        .table("characters")
        .formatter(move |race, row| {
            let Some(race) = small(race).and_then(race_name) else {
                return Value::Null;
            };
            let gender = row.get(gender_index).and_then(small).unwrap_or(0);

            Value::from(format!("{race}_{}", gender_name(gender)))
        })
}

pub fn online_column() -> ColumnSpec {
    ColumnSpec::new("online")
        .table("characters")
        .formatter(|online, _| Value::from(online.as_i64() == Some(1)))
}

/// Excludes characters of game master accounts from a grid that selects `characters`.
///
/// Joins the realm's `account_access` rows that mark a game master and keeps only rows
/// without such a match.
pub fn hide_game_masters(grid: ServerSideProcessor, filter: &GameMasterFilter) -> ServerSideProcessor {
    grid.join(
        JoinSpec::new(JoinKind::Left, "characters", "account", "account_access", "id")
            .database(filter.auth_database.clone())
            .on(filter.join_on()),
    )
    .and_where("`account_access`.`id` IS NULL")
}
