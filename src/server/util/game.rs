//! Game constants: race and class names and faction membership.

/// Races belonging to the Alliance; every other playable race is Horde.
const ALLIANCE_RACES: [u8; 5] = [1, 3, 4, 7, 11];

/// Faction of a playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Horde,
    Alliance,
}

impl Faction {
    pub fn from_race(race: u8) -> Self {
        if ALLIANCE_RACES.contains(&race) {
            Faction::Alliance
        } else {
            Faction::Horde
        }
    }

    /// Faction id as used by the achievement extract (`-1` there means both).
    pub fn id(self) -> i64 {
        match self {
            Faction::Horde => 0,
            Faction::Alliance => 1,
        }
    }
}

/// File-name style race name, e.g. `nightelf` or `scourge`.
pub fn race_name(race: u8) -> Option<&'static str> {
    Some(match race {
        1 => "human",
        2 => "orc",
        3 => "dwarf",
        4 => "nightelf",
        5 => "scourge",
        6 => "tauren",
        7 => "gnome",
        8 => "troll",
        10 => "bloodelf",
        11 => "draenei",
        _ => return None,
    })
}

/// File-name style class name, e.g. `deathknight`.
pub fn class_name(class: u8) -> Option<&'static str> {
    Some(match class {
        1 => "warrior",
        2 => "paladin",
        3 => "hunter",
        4 => "rogue",
        5 => "priest",
        6 => "deathknight",
        7 => "shaman",
        8 => "mage",
        9 => "warlock",
        11 => "druid",
        _ => return None,
    })
}

pub fn race_display_name(race: u8) -> Option<&'static str> {
    Some(match race {
        1 => "Human",
        2 => "Orc",
        3 => "Dwarf",
        4 => "Night Elf",
        5 => "Undead",
        6 => "Tauren",
        7 => "Gnome",
        8 => "Troll",
        10 => "Blood Elf",
        11 => "Draenei",
        _ => return None,
    })
}

pub fn class_display_name(class: u8) -> Option<&'static str> {
    Some(match class {
        1 => "Warrior",
        2 => "Paladin",
        3 => "Hunter",
        4 => "Rogue",
        5 => "Priest",
        6 => "Death Knight",
        7 => "Shaman",
        8 => "Mage",
        9 => "Warlock",
        11 => "Druid",
        _ => return None,
    })
}

/// `male` for gender 0, `female` otherwise.
pub fn gender_name(gender: u8) -> &'static str {
    if gender == 0 {
        "male"
    } else {
        "female"
    }
}

/// Normalizes a spell icon texture path into the icon name served to clients.
///
/// Lowercases the path, drops the first `interface\icons\` and `interface\spellbook\`
/// prefixes and a single trailing `.`.
pub fn spell_icon_name(texture: &str) -> String {
    let lower = texture.to_lowercase();
    let name = lower.replacen("interface\\icons\\", "", 1);
    let name = name.replacen("interface\\spellbook\\", "", 1);

    match name.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
