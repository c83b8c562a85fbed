//! Reference tables known to the catalog and their typed rows.
//!
//! Each table retains only the fields listed in its allow-list; a typed row may only
//! read fields that appear there.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::server::dbc::record::de;

/// Client build the 3.3.5 extracts were taken from.
const CLASSIC_BUILD: &str = "3.3.5_12340";
/// Retail build providing appearance and mount data.
const RETAIL_BUILD: &str = "9.2.0_41462";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbcTable {
    Achievement,
    AchievementCategory,
    GlyphProperties,
    Item,
    ItemRetail,
    ItemAppearance,
    ItemModifiedAppearance,
    ItemDisplayInfo,
    Mount,
    MountDisplay,
    Spell,
    SpellItemEnchantment,
    SpellIcon,
    Talent,
    TalentTab,
}

impl DbcTable {
    pub const ALL: [DbcTable; 15] = [
        DbcTable::Achievement,
        DbcTable::AchievementCategory,
        DbcTable::GlyphProperties,
        DbcTable::Item,
        DbcTable::ItemRetail,
        DbcTable::ItemAppearance,
        DbcTable::ItemModifiedAppearance,
        DbcTable::ItemDisplayInfo,
        DbcTable::Mount,
        DbcTable::MountDisplay,
        DbcTable::Spell,
        DbcTable::SpellItemEnchantment,
        DbcTable::SpellIcon,
        DbcTable::Talent,
        DbcTable::TalentTab,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DbcTable::Achievement => "achievement",
            DbcTable::AchievementCategory => "achievementCategory",
            DbcTable::GlyphProperties => "glyphProperties",
            DbcTable::Item => "item",
            DbcTable::ItemRetail => "itemRetail",
            DbcTable::ItemAppearance => "itemAppearance",
            DbcTable::ItemModifiedAppearance => "itemModifiedAppearance",
            DbcTable::ItemDisplayInfo => "itemDisplayInfo",
            DbcTable::Mount => "mount",
            DbcTable::MountDisplay => "mountDisplay",
            DbcTable::Spell => "spell",
            DbcTable::SpellItemEnchantment => "spellItemEnchantment",
            DbcTable::SpellIcon => "spellIcon",
            DbcTable::Talent => "talent",
            DbcTable::TalentTab => "talentTab",
        }
    }

    /// File name of the extract inside the data directory.
    pub fn file_name(self) -> String {
        let (stem, build) = match self {
            DbcTable::Achievement => ("Achievement", CLASSIC_BUILD),
            DbcTable::AchievementCategory => ("AchievementCategory", CLASSIC_BUILD),
            DbcTable::GlyphProperties => ("GlyphProperties", CLASSIC_BUILD),
            DbcTable::Item => ("Item", CLASSIC_BUILD),
            DbcTable::ItemRetail => ("Item", RETAIL_BUILD),
            DbcTable::ItemAppearance => ("ItemAppearance", RETAIL_BUILD),
            DbcTable::ItemModifiedAppearance => ("ItemModifiedAppearance", RETAIL_BUILD),
            DbcTable::ItemDisplayInfo => ("ItemDisplayInfo", CLASSIC_BUILD),
            DbcTable::Mount => ("Mount", RETAIL_BUILD),
            DbcTable::MountDisplay => ("MountXDisplay", RETAIL_BUILD),
            DbcTable::Spell => ("Spell", CLASSIC_BUILD),
            DbcTable::SpellItemEnchantment => ("SpellItemEnchantment", CLASSIC_BUILD),
            DbcTable::SpellIcon => ("SpellIcon", CLASSIC_BUILD),
            DbcTable::Talent => ("Talent", CLASSIC_BUILD),
            DbcTable::TalentTab => ("TalentTab", CLASSIC_BUILD),
        };

        format!("{stem}_{build}.csv")
    }

    /// Fields retained when reading the table.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            DbcTable::Achievement => &[
                "id",
                "faction",
                "titleLang0",
                "descriptionLang0",
                "category",
                "points",
                "flags",
                "iconId",
            ],
            DbcTable::AchievementCategory => &["id", "parent", "nameLang0"],
            DbcTable::GlyphProperties => &["id", "spellId"],
            DbcTable::Item => &["id", "classId", "subclassId", "displayInfoId", "inventoryType"],
            DbcTable::ItemRetail => &["id", "inventoryType"],
            DbcTable::ItemAppearance => &["id", "itemDisplayInfoId"],
            DbcTable::ItemModifiedAppearance => &["id", "itemId", "itemAppearanceId"],
            DbcTable::ItemDisplayInfo => &["id", "inventoryIcon0"],
            DbcTable::Mount => &["id", "sourceSpellId"],
            DbcTable::MountDisplay => &["id", "creatureDisplayInfoId", "mountId"],
            DbcTable::Spell => &["id", "mechanic", "spellIconId"],
            DbcTable::SpellItemEnchantment => &["id", "srcItemId"],
            DbcTable::SpellIcon => &["id", "textureFilename"],
            DbcTable::Talent => &[
                "id",
                "tabId",
                "tierId",
                "columnIndex",
                "spellRank0",
                "spellRank1",
                "spellRank2",
                "spellRank3",
                "spellRank4",
                "prereqTalent0",
                "prereqRank0",
            ],
            DbcTable::TalentTab => &["id", "nameLang0", "spellIconId", "classMask"],
        }
    }
}

/// A typed row of one reference table.
pub trait DbcRow: DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: DbcTable;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementRow {
    pub id: i64,
    /// -1 for both factions, otherwise 0 Horde / 1 Alliance.
    pub faction: i64,
    #[serde(deserialize_with = "de::text")]
    pub title_lang0: String,
    #[serde(deserialize_with = "de::text")]
    pub description_lang0: String,
    pub category: i64,
    pub points: i64,
    pub flags: i64,
    pub icon_id: i64,
}

impl DbcRow for AchievementRow {
    const TABLE: DbcTable = DbcTable::Achievement;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementCategoryRow {
    pub id: i64,
    pub parent: i64,
    #[serde(deserialize_with = "de::text")]
    pub name_lang0: String,
}

impl DbcRow for AchievementCategoryRow {
    const TABLE: DbcTable = DbcTable::AchievementCategory;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlyphPropertiesRow {
    pub id: i64,
    pub spell_id: i64,
}

impl DbcRow for GlyphPropertiesRow {
    const TABLE: DbcTable = DbcTable::GlyphProperties;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRow {
    pub id: i64,
    pub class_id: i64,
    pub subclass_id: i64,
    pub display_info_id: i64,
    pub inventory_type: i64,
}

impl DbcRow for ItemRow {
    const TABLE: DbcTable = DbcTable::Item;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRetailRow {
    pub id: i64,
    pub inventory_type: i64,
}

impl DbcRow for ItemRetailRow {
    const TABLE: DbcTable = DbcTable::ItemRetail;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAppearanceRow {
    pub id: i64,
    pub item_display_info_id: i64,
}

impl DbcRow for ItemAppearanceRow {
    const TABLE: DbcTable = DbcTable::ItemAppearance;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemModifiedAppearanceRow {
    pub id: i64,
    pub item_id: i64,
    pub item_appearance_id: i64,
}

impl DbcRow for ItemModifiedAppearanceRow {
    const TABLE: DbcTable = DbcTable::ItemModifiedAppearance;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDisplayInfoRow {
    pub id: i64,
    #[serde(deserialize_with = "de::text")]
    pub inventory_icon0: String,
}

impl DbcRow for ItemDisplayInfoRow {
    const TABLE: DbcTable = DbcTable::ItemDisplayInfo;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MountRow {
    pub id: i64,
    pub source_spell_id: i64,
}

impl DbcRow for MountRow {
    const TABLE: DbcTable = DbcTable::Mount;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MountDisplayRow {
    pub id: i64,
    pub creature_display_info_id: i64,
    pub mount_id: i64,
}

impl DbcRow for MountDisplayRow {
    const TABLE: DbcTable = DbcTable::MountDisplay;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellRow {
    pub id: i64,
    pub mechanic: i64,
    pub spell_icon_id: i64,
}

impl DbcRow for SpellRow {
    const TABLE: DbcTable = DbcTable::Spell;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellItemEnchantmentRow {
    pub id: i64,
    pub src_item_id: i64,
}

impl DbcRow for SpellItemEnchantmentRow {
    const TABLE: DbcTable = DbcTable::SpellItemEnchantment;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellIconRow {
    pub id: i64,
    #[serde(deserialize_with = "de::text")]
    pub texture_filename: String,
}

impl DbcRow for SpellIconRow {
    const TABLE: DbcTable = DbcTable::SpellIcon;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentRow {
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
}

impl DbcRow for TalentRow {
    const TABLE: DbcTable = DbcTable::Talent;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalentTabRow {
    pub id: i64,
    #[serde(deserialize_with = "de::text")]
    pub name_lang0: String,
    pub spell_icon_id: i64,
    pub class_mask: i64,
}

impl DbcRow for TalentTabRow {
    const TABLE: DbcTable = DbcTable::TalentTab;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn retail_tables_use_retail_build() {
        assert_eq!(DbcTable::Item.file_name(), "Item_3.3.5_12340.csv");
        assert_eq!(DbcTable::ItemRetail.file_name(), "Item_9.2.0_41462.csv");
        assert_eq!(DbcTable::MountDisplay.file_name(), "MountXDisplay_9.2.0_41462.csv");
    }

    #[test]
    fn every_table_has_a_distinct_file() {
        let files: HashSet<String> = DbcTable::ALL.iter().map(|t| t.file_name()).collect();
        assert_eq!(files.len(), DbcTable::ALL.len());
    }

    #[test]
    fn every_allow_list_keeps_the_id() {
        for table in DbcTable::ALL {
            assert_eq!(table.fields()[0], "id", "{}", table.name());
        }
    }
}
