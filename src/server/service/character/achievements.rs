//! Achievement listing of the achievements page.

use std::collections::{BTreeMap, HashMap};

use crate::{
    model::character::{AchievementCategoryDto, AchievementDto, EarnedAchievementDto},
    server::{
        dbc::{catalog::DbcCatalog, table::AchievementRow},
        error::dbc::DbcError,
        service::character::lookups::CharacterLookups,
        util::game::Faction,
    },
};

/// Faction value of achievements open to both factions.
const BOTH_FACTIONS: i64 = -1;

pub async fn categories(dbc: &DbcCatalog) -> Result<Vec<AchievementCategoryDto>, DbcError> {
    dbc.achievement_category()
        .map(|row| AchievementCategoryDto {
            id: row.id,
            parent: row.parent,
            name_lang0: row.name_lang0,
        })
        .collect()
        .await
}

/// Achievements a character of `faction` can earn, in extract order.
///
/// # Arguments
/// - `lookups` - Achievement table loaded at startup
/// - `icons` - Spell icon id to icon name; unknown icons render empty
/// - `faction` - Faction of the character's race
pub fn available(
    lookups: &CharacterLookups,
    icons: &HashMap<i64, String>,
    faction: Faction,
) -> Vec<AchievementDto> {
    lookups
        .achievements()
        .iter()
        .filter(|achievement| {
            achievement.faction == BOTH_FACTIONS || achievement.faction == faction.id()
        })
        .map(|achievement| achievement_dto(achievement, icons))
        .collect()
}

fn achievement_dto(achievement: &AchievementRow, icons: &HashMap<i64, String>) -> AchievementDto {
    AchievementDto {
        id: achievement.id,
        category: achievement.category,
        title: achievement.title_lang0.clone(),
        description: achievement.description_lang0.clone(),
        points: achievement.points,
        icon: icons.get(&achievement.icon_id).cloned().unwrap_or_default(),
    }
}

/// Earn dates keyed by achievement id; ids missing from the extract are dropped.
pub fn earned(
    lookups: &CharacterLookups,
    rows: Vec<entity::character_achievement::Model>,
) -> BTreeMap<u16, EarnedAchievementDto> {
    rows.into_iter()
        .filter(|row| lookups.achievement(row.achievement as i64).is_some())
        .map(|row| (row.achievement, EarnedAchievementDto { date: row.date }))
        .collect()
}
