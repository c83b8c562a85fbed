//! Reference data extract fixtures.
//!
//! Writes a small but consistent set of the armory's flat extracts: a warrior with an
//! equipped gem, a mount spell, two talent tabs and a handful of achievements. Headers use
//! the raw extract spelling (`ID`, `Title_lang[0]`) so readers exercise header
//! normalization.

use std::path::Path;

use tempfile::TempDir;

use crate::{error::TestError, fixture::customization};

/// Item id of an equippable sword with display info 20190.
pub const ITEM_SWORD: u32 = 19019;
/// Item id of a gem (item class 3) produced by enchantment 3312.
pub const ITEM_GEM: u32 = 40111;
/// Item id of the guild tabard.
pub const ITEM_GUILD_TABARD: u32 = 5976;
/// Item id of a bow equipped in the ranged slot.
pub const ITEM_BOW: u32 = 30000;
/// Enchantment whose source item is `ITEM_GEM`.
pub const ENCHANT_GEM: u32 = 3312;
/// Regular enchantment without a source item.
pub const ENCHANT_WEAPON: u32 = 3789;
/// Enchantment used as the sword's socket bonus.
pub const ENCHANT_SOCKET_BONUS: u32 = 3307;
/// Spell teaching the mount with creature display 25280.
pub const SPELL_MOUNT: u32 = 48778;
/// Mounted-mechanic spell without a mount row.
pub const SPELL_MOUNT_UNLISTED: u32 = 32240;
/// First rank of the Arms talent at tab 161.
pub const SPELL_TALENT: u32 = 12294;
/// Spell granted by glyph 251.
pub const SPELL_GLYPH: u32 = 58388;

const FILES: &[(&str, &str)] = &[
    (
        "Item_3.3.5_12340.csv",
        "ID,ClassID,SubclassID,Sound_override_subclassID,Material,DisplayInfoID,InventoryType,SheatheType\n\
         19019,2,7,-1,1,30606,13,3\n\
         40111,3,0,-1,4,45305,0,0\n\
         5976,4,0,-1,7,31230,19,0\n\
         2105,4,0,-1,7,9996,4,0\n\
         30000,2,2,-1,1,40000,15,2\n",
    ),
    (
        "Item_9.2.0_41462.csv",
        "ID,ClassID,SubclassID,Material,InventoryType,SheatheType,Sound_override_subclassID,IconFileDataID,ItemGroupSoundsID\n\
         19019,2,7,1,21,3,-1,135349,0\n\
         40111,3,0,4,0,0,-1,134094,0\n\
         5976,4,0,7,19,0,-1,135026,0\n\
         2105,4,0,7,4,0,-1,135022,0\n\
         30000,2,2,1,15,2,-1,135490,0\n",
    ),
    (
        "ItemDisplayInfo_3.3.5_12340.csv",
        "ID,ModelName[0],ModelName[1],InventoryIcon[0],InventoryIcon[1],GeosetGroup[0]\n\
         30606,Sword_2H_Thunderfury.mdx,,INV_Sword_39,,0\n\
         45305,,,INV_Jewelcrafting_Gem_38,,0\n\
         31230,,,INV_Shirt_GuildTabard_01,,0\n\
         9996,,,INV_Shirt_05,,0\n\
         40000,Bow_1H_Sunwell.mdx,,INV_Weapon_Bow_34,,0\n",
    ),
    (
        "ItemAppearance_9.2.0_41462.csv",
        "ID,DisplayType,ItemDisplayInfoID,DefaultIconFileDataID,UiOrder\n\
         100,11,120001,135349,0\n\
         101,11,120002,135022,0\n\
         102,11,120003,135026,0\n\
         103,11,120004,135490,0\n",
    ),
    (
        "ItemModifiedAppearance_9.2.0_41462.csv",
        "ID,ItemID,ItemAppearanceModifierID,ItemAppearanceID,OrderIndex,TransmogSourceTypeEnum\n\
         1000,19019,0,100,0,0\n\
         1001,2105,0,101,0,0\n\
         1002,5976,0,102,0,0\n\
         1003,30000,0,103,0,0\n",
    ),
    (
        "SpellItemEnchantment_3.3.5_12340.csv",
        "ID,Charges,Effect[0],Name_lang[0],ItemVisual,Flags,Src_itemID,Condition_ID\n\
         3312,0,5,\"+8 Strength\",0,0,40111,0\n\
         3789,0,3,Berserking,0,0,0,0\n\
         3307,0,5,\"+9 Stamina\",0,0,0,0\n",
    ),
    (
        "Spell_3.3.5_12340.csv",
        "ID,Category,Mechanic,Attributes,SpellIconID,Name_lang[0]\n\
         48778,0,21,0,2000,Acherus Deathcharger\n\
         32240,0,21,0,2001,Snowy Gryphon\n\
         12294,0,0,0,1000,Mortal Strike\n\
         12296,0,0,0,1001,Anger Management\n\
         58388,0,0,0,3000,Glyph of Devastate\n",
    ),
    (
        "Mount_9.2.0_41462.csv",
        "Name_lang,SourceText_lang,Description_lang,ID,MountTypeID,Flags,SourceTypeEnum,SourceSpellID\n\
         \"Acherus Deathcharger\",\"Quest: Into the Realm of Shadows\",\"A \"\"deathcharger\"\", raised\nfrom the dead.\",221,230,0,1,48778\n",
    ),
    (
        "MountXDisplay_9.2.0_41462.csv",
        "ID,CreatureDisplayInfoID,PlayerConditionID,MountID\n\
         1,25280,0,221\n",
    ),
    (
        "SpellIcon_3.3.5_12340.csv",
        "ID,TextureFilename\n\
         2000,Interface\\Icons\\Spell_DeathKnight_SummonDeathCharger\n\
         2001,Interface\\Icons\\Ability_Mount_Gryphon_01\n\
         1000,Interface\\Icons\\Ability_Warrior_SavageBlow\n\
         1001,Interface\\Icons\\Spell_Shadow_UnholyFrenzy.\n\
         3000,Interface\\Spellbook\\Glyph_Devastate\n\
         4000,Interface\\Icons\\Achievement_Level_10\n\
         5000,Interface\\Icons\\Ability_Rogue_Eviscerate\n",
    ),
    (
        "Talent_3.3.5_12340.csv",
        "ID,TabID,TierID,ColumnIndex,SpellRank[0],SpellRank[1],SpellRank[2],SpellRank[3],SpellRank[4],SpellRank[5],PrereqTalent[0],PrereqRank[0],Flags\n\
         135,161,6,1,12294,0,0,0,0,0,137,0,0\n\
         137,161,5,1,12296,0,0,0,0,0,0,0,0\n",
    ),
    (
        "TalentTab_3.3.5_12340.csv",
        "ID,Name_lang[0],SpellIconID,RaceMask,ClassMask,CategoryEnumID,OrderIndex,BackgroundFile\n\
         161,Arms,5000,0,1,0,0,WarriorArms\n\
         164,Fury,1000,0,1,0,1,WarriorFury\n\
         283,Balance,1001,0,1024,0,0,DruidBalance\n",
    ),
    (
        "GlyphProperties_3.3.5_12340.csv",
        "ID,SpellID,GlyphSlotFlags,SpellIconID\n\
         251,58388,0,3000\n",
    ),
    (
        "Achievement_3.3.5_12340.csv",
        "ID,Faction,Instance_ID,Supercedes,Title_lang[0],Description_lang[0],Category,Points,Ui_order,Flags,IconID,Reward_lang[0]\n\
         6,-1,-1,0,Level 10,Reach level 10.,92,10,1,0,4000,\n\
         963,0,-1,0,Tricks and Treats of Kalimdor,\"Visit the Candy Buckets in Kalimdor, for the Horde.\",96,10,2,0,4000,\n\
         964,1,-1,0,Tricks and Treats of Eastern Kingdoms,Visit the Candy Buckets for the Alliance.,96,10,3,0,4000,\n",
    ),
    (
        "AchievementCategory_3.3.5_12340.csv",
        "ID,Parent,Name_lang[0],Ui_order\n\
         92,-1,General,1\n\
         96,-1,Quests,2\n",
    ),
];

/// Writes every reference extract and customization document to a new temporary directory.
///
/// # Returns
/// - `Ok(TempDir)` - Directory usable as the armory's data directory
/// - `Err(TestError)` - Failed to create the directory or write a file
pub fn reference_data() -> Result<TempDir, TestError> {
    let dir = tempfile::tempdir()?;

    write_extracts(dir.path())?;
    customization::write_documents(dir.path())?;

    Ok(dir)
}

/// Writes only the flat extracts into an existing directory.
///
/// # Arguments
/// - `dir` - Target data directory
///
/// # Returns
/// - `Ok(())` - All extracts written
/// - `Err(TestError::Io)` - A file could not be written
pub fn write_extracts(dir: &Path) -> Result<(), TestError> {
    for (name, contents) in FILES {
        std::fs::write(dir.join(name), contents)?;
    }

    Ok(())
}
