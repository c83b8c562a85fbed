use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{emblem::ArenaEmblemDto, grid::PagedResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArenaIndexDto {
    pub title: String,
    pub realms: Vec<String>,
}

/// Ladder grid page. Row columns: name, rating, season wins, season games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LadderDto {
    #[serde(flatten)]
    pub grid: PagedResult,
    pub realm: String,
    pub team_size: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArenaTeamMemberDto {
    pub name: String,
    pub week_games: u16,
    pub week_wins: u16,
    pub season_games: u16,
    pub season_wins: u16,
    pub personal_rating: u16,
    /// File-name style race name, e.g. `nightelf`.
    pub race: Option<String>,
    /// File-name style class name, e.g. `deathknight`.
    pub class: Option<String>,
    /// `male` or `female`.
    pub gender: String,
    pub online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArenaTeamDto {
    pub title: String,
    pub realm: String,
    pub name: String,
    pub captain_guid: u32,
    /// Team size: 2, 3 or 5.
    #[serde(rename = "type")]
    pub team_type: u8,
    pub rating: u16,
    pub season_games: u16,
    pub season_wins: u16,
    pub week_games: u16,
    pub week_wins: u16,
    pub emblem: ArenaEmblemDto,
    pub members: Vec<ArenaTeamMemberDto>,
}
