//! Guild page model.

use crate::{
    model::guild::GuildDto,
    server::{model::emblem::GuildEmblem, util::game::Faction},
};

/// A guild with the data shown on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildPage {
    pub guild: entity::guild::Model,
    /// Leader character; absent when the leader row no longer exists.
    pub leader: Option<entity::characters::Model>,
    pub members_count: u64,
}

impl GuildPage {
    /// Converts into the page DTO.
    ///
    /// The faction is derived from the leader's race. A guild without a leader row is
    /// shown with an empty leader name as a Horde guild.
    pub fn into_dto(self, realm: &str) -> GuildDto {
        let emblem = GuildEmblem::from_entity(&self.guild).into_dto();
        let (leader, faction) = match self.leader {
            Some(leader) => (leader.name, Faction::from_race(leader.race)),
            None => (String::new(), Faction::Horde),
        };

        GuildDto {
            title: format!("Armory - {}", self.guild.name),
            realm: realm.to_string(),
            id: self.guild.guildid,
            name: self.guild.name,
            leader,
            faction: faction.id(),
            emblem,
            members_count: self.members_count as i64,
        }
    }
}
