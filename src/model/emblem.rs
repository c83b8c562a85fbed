use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Guild banner; ids are zero-padded to two digits to build image names such as
/// `Emblem_03_05`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildEmblemDto {
    pub background: String,
    pub icon: String,
    pub icon_color: String,
    pub border: String,
    pub border_color: String,
}

/// Arena team banner; colors are ARGB integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArenaEmblemDto {
    pub background: u32,
    pub icon: u8,
    pub icon_color: u32,
    pub border: u8,
    pub border_color: u32,
}
