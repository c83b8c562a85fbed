use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::emblem::ArenaEmblemDto;

/// Header data shown on every character page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheetDto {
    pub title: String,
    pub realm: String,
    pub name: String,
    pub guid: u32,
    /// Display name such as `Night Elf`.
    pub race: Option<String>,
    /// Display name such as `Death Knight`.
    pub class: Option<String>,
    pub level: u8,
    pub online: bool,
    pub guild: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    pub slot: u8,
    pub item_entry: u32,
    pub flags: u32,
    pub random_property_id: i32,
    pub class_id: Option<i64>,
    pub subclass_id: Option<i64>,
    /// Inventory icon name of the item's display info.
    pub icon: Option<String>,
    /// Gem item ids socketed into the item.
    pub gems: Vec<i64>,
    /// Enchantment ids that are neither gems nor the item's socket bonus.
    pub enchantments: Vec<i64>,
}

/// One resolved customization option of the character model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationChoiceDto {
    pub option_id: u32,
    pub choice_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MountDto {
    pub creature_display_id: i64,
    pub spell: i64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterModelDto {
    pub race: u8,
    pub gender: u8,
    pub class: u8,
    pub flags: u32,
    /// `[inventoryType, itemDisplayInfoId]` pairs of the visible equipment.
    #[schema(value_type = Vec<Vec<i64>>)]
    pub character_model_items: Vec<[i64; 2]>,
    pub customization_options: Vec<CustomizationChoiceDto>,
    pub equipment: Vec<EquipmentDto>,
    pub mounts: Vec<MountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    #[serde(flatten)]
    pub sheet: CharacterSheetDto,
    pub data: CharacterModelDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalentSpellDto {
    pub id: i64,
    pub tab_id: i64,
    pub tier_id: i64,
    pub column_index: i64,
    pub spell_rank0: i64,
    pub spell_rank1: i64,
    pub spell_rank2: i64,
    pub spell_rank3: i64,
    pub spell_rank4: i64,
    pub prereq_talent0: i64,
    pub prereq_rank0: i64,
    /// Icon name of the first rank's spell.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalentTreeDto {
    pub name: String,
    pub icon: String,
    pub spells: Vec<TalentSpellDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TalentsDataDto {
    /// Learned talent spell ids of the primary and secondary spec.
    #[schema(value_type = Vec<Vec<u32>>)]
    pub talents: [Vec<u32>; 2],
    pub trees: Vec<TalentTreeDto>,
    /// Glyph spell ids of the primary and secondary talent group.
    #[schema(value_type = Vec<Vec<i64>>)]
    pub glyphs: [Vec<i64>; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTalentsDto {
    #[serde(flatten)]
    pub sheet: CharacterSheetDto,
    pub data: TalentsDataDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCategoryDto {
    pub id: i64,
    pub parent: i64,
    pub name_lang0: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: i64,
    pub category: i64,
    pub title: String,
    pub description: String,
    pub points: i64,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievementDto {
    /// Unix timestamp the achievement was earned at.
    pub date: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsDataDto {
    pub categories: Vec<AchievementCategoryDto>,
    /// Achievements available to the character's faction.
    pub achievements: Vec<AchievementDto>,
    /// Earned achievements keyed by achievement id.
    pub earned: BTreeMap<u16, EarnedAchievementDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KillsDto {
    pub total: u32,
    pub today: u16,
    pub yesterday: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterArenaTeamDto {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub team_type: u8,
    pub rating: u16,
    pub season_wins: u16,
    pub season_games: u16,
    pub emblem: ArenaEmblemDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPvpDto {
    #[serde(flatten)]
    pub sheet: CharacterSheetDto,
    /// Faction of the character's race: 0 Horde, 1 Alliance.
    pub faction: i64,
    pub kills: KillsDto,
    pub arena_teams: Vec<CharacterArenaTeamDto>,
}
