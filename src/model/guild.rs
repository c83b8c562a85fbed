use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{emblem::GuildEmblemDto, grid::PagedResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildDto {
    pub title: String,
    pub realm: String,
    pub id: u32,
    pub name: String,
    /// Name of the guild leader.
    pub leader: String,
    /// Faction of the leader's race: 0 Horde, 1 Alliance.
    pub faction: i64,
    pub emblem: GuildEmblemDto,
    pub members_count: i64,
}

/// Member grid page with the guild's rank names.
///
/// Row columns: name, rank id, level, class name, gendered race name, online, gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuildMembersDto {
    #[serde(flatten)]
    pub grid: PagedResult,
    /// HTML-escaped rank names keyed by rank id.
    pub ranks: BTreeMap<u8, String>,
}
