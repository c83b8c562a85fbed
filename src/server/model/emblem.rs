//! Guild and arena team banners.

use crate::model::emblem::{ArenaEmblemDto, GuildEmblemDto};

/// Guild banner ids as stored in the `guild` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildEmblem {
    pub style: u8,
    pub color: u8,
    pub border_style: u8,
    pub border_color: u8,
    pub background: u8,
}

impl GuildEmblem {
    pub fn from_entity(guild: &entity::guild::Model) -> Self {
        Self {
            style: guild.emblem_style,
            color: guild.emblem_color,
            border_style: guild.border_style,
            border_color: guild.border_color,
            background: guild.background_color,
        }
    }

    /// Converts to the DTO, zero-padding every id to two digits.
    pub fn into_dto(self) -> GuildEmblemDto {
        let pad = |id: u8| format!("{id:02}");
        GuildEmblemDto {
            background: pad(self.background),
            icon: pad(self.style),
            icon_color: pad(self.color),
            border: pad(self.border_style),
            border_color: pad(self.border_color),
        }
    }
}

/// Arena team banner; colors are ARGB integers kept as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaEmblem {
    pub background: u32,
    pub style: u8,
    pub color: u32,
    pub border_style: u8,
    pub border_color: u32,
}

impl ArenaEmblem {
    pub fn from_entity(team: &entity::arena_team::Model) -> Self {
        Self {
            background: team.background_color,
            style: team.emblem_style,
            color: team.emblem_color,
            border_style: team.border_style,
            border_color: team.border_color,
        }
    }

    pub fn into_dto(self) -> ArenaEmblemDto {
        ArenaEmblemDto {
            background: self.background,
            icon: self.style,
            icon_color: self.color,
            border: self.border_style,
            border_color: self.border_color,
        }
    }
}
