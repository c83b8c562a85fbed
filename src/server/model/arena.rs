//! Arena team page model.

use crate::{
    model::arena::{ArenaTeamDto, ArenaTeamMemberDto},
    server::{
        model::emblem::ArenaEmblem,
        util::game::{class_name, gender_name, race_name},
    },
};

/// Allowed arena team sizes, also the value of `arena_team.type`.
pub const TEAM_SIZES: [u8; 3] = [2, 3, 5];

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaTeamMember {
    pub member: entity::arena_team_member::Model,
    pub character: entity::characters::Model,
}

impl ArenaTeamMember {
    pub fn into_dto(self) -> ArenaTeamMemberDto {
        ArenaTeamMemberDto {
            name: self.character.name,
            week_games: self.member.week_games,
            week_wins: self.member.week_wins,
            season_games: self.member.season_games,
            season_wins: self.member.season_wins,
            personal_rating: self.member.personal_rating,
            race: race_name(self.character.race).map(str::to_string),
            class: class_name(self.character.class).map(str::to_string),
            gender: gender_name(self.character.gender).to_string(),
            online: self.character.online == 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaTeam {
    pub team: entity::arena_team::Model,
    pub members: Vec<ArenaTeamMember>,
}

impl ArenaTeam {
    pub fn into_dto(self, realm: &str) -> ArenaTeamDto {
        let emblem = ArenaEmblem::from_entity(&self.team).into_dto();
        let team = self.team;

        ArenaTeamDto {
            title: format!("Armory - {}", team.name),
            realm: realm.to_string(),
            name: team.name,
            captain_guid: team.captain_guid,
            team_type: team.r#type,
            rating: team.rating,
            season_games: team.season_games,
            season_wins: team.season_wins,
            week_games: team.week_games,
            week_wins: team.week_wins,
            emblem,
            members: self
                .members
                .into_iter()
                .map(ArenaTeamMember::into_dto)
                .collect(),
        }
    }
}
