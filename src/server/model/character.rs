//! Character rows and their conversion to page models.

use sea_orm::FromQueryResult;

use crate::{
    model::character::{CharacterArenaTeamDto, CharacterSheetDto, KillsDto},
    server::{
        model::emblem::ArenaEmblem,
        util::game::{class_display_name, race_display_name},
    },
};

/// Inventory slots holding equipped items (head through tabard).
pub const EQUIPMENT_SLOTS: std::ops::RangeInclusive<u8> = 0..=18;
/// Ranged weapon slot, only rendered for hunters.
pub const RANGED_SLOT: u8 = 17;
/// Equipment slots drawn by the model viewer.
pub const VISIBLE_SLOTS: [u8; 14] = [0, 2, 3, 4, 5, 6, 7, 8, 9, 14, 15, 16, 17, 18];
/// Guild tabard item; renders blank in the model viewer.
pub const GUILD_TABARD_ITEM: u32 = 5976;
pub const CLASS_HUNTER: u8 = 3;
pub const CLASS_DEATH_KNIGHT: u8 = 6;

/// Identifies the character a page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterKey<'a> {
    /// Case-insensitive character name.
    Name(&'a str),
    Guid(u32),
}

/// A character with its appearance and guild name.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CharacterData {
    pub guid: u32,
    pub name: String,
    pub race: u8,
    pub class: u8,
    pub gender: u8,
    pub level: u8,
    pub skin: u8,
    pub face: u8,
    pub hair_style: u8,
    pub hair_color: u8,
    pub facial_style: u8,
    pub player_flags: u32,
    pub online: u8,
    pub guild: Option<String>,
}

impl CharacterData {
    /// Builds the header shared by every character page.
    ///
    /// # Arguments
    /// - `realm` - Display name of the character's realm
    /// - `title` - Page title
    pub fn to_sheet_dto(&self, realm: &str, title: String) -> CharacterSheetDto {
        CharacterSheetDto {
            title,
            realm: realm.to_string(),
            name: self.name.clone(),
            guid: self.guid,
            race: race_display_name(self.race).map(str::to_string),
            class: class_display_name(self.class).map(str::to_string),
            level: self.level,
            online: self.online == 1,
            guild: self.guild.clone(),
        }
    }

    pub fn is_death_knight(&self) -> bool {
        self.class == CLASS_DEATH_KNIGHT
    }
}

/// An item equipped in one of the character's equipment slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRow {
    pub slot: u8,
    pub item_entry: u32,
    pub flags: u32,
    /// Space separated enchantment ids as stored by the server.
    pub enchantments: String,
    pub random_property_id: i16,
}

impl EquipmentRow {
    pub fn from_entity(
        inventory: entity::character_inventory::Model,
        item: entity::item_instance::Model,
    ) -> Self {
        Self {
            slot: inventory.slot,
            item_entry: item.item_entry,
            flags: item.flags,
            enchantments: item.enchantments,
            random_property_id: item.random_property_id,
        }
    }

    /// Non-zero enchantment ids of the item. Tokens that are not numbers are skipped.
    pub fn enchantment_ids(&self) -> Vec<i64> {
        self.enchantments
            .split_whitespace()
            .filter_map(|token| token.parse::<i64>().ok())
            .filter(|id| *id != 0)
            .collect()
    }
}

/// Honorable kill counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PvpKills {
    pub total: u32,
    pub today: u16,
    pub yesterday: u16,
}

impl PvpKills {
    pub fn from_entity(character: &entity::characters::Model) -> Self {
        Self {
            total: character.total_kills,
            today: character.today_kills,
            yesterday: character.yesterday_kills,
        }
    }

    pub fn into_dto(self) -> KillsDto {
        KillsDto {
            total: self.total,
            today: self.today,
            yesterday: self.yesterday,
        }
    }
}

/// Converts an arena team the character belongs to into its summary on the PvP page.
pub fn arena_team_summary(team: entity::arena_team::Model) -> CharacterArenaTeamDto {
    let emblem = ArenaEmblem::from_entity(&team).into_dto();

    CharacterArenaTeamDto {
        id: team.arena_team_id,
        name: team.name,
        team_type: team.r#type,
        rating: team.rating,
        season_wins: team.season_wins,
        season_games: team.season_games,
        emblem,
    }
}
