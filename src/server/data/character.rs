use std::time::Duration;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder, Value,
};

use crate::server::{
    error::query::QueryError,
    model::{
        character::{CharacterData, CharacterKey, EquipmentRow, PvpKills, EQUIPMENT_SLOTS},
        realm::GameMasterFilter,
    },
    util::query::{query_one, with_timeout},
};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
    timeout: Duration,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, timeout: Duration) -> Self {
        Self { db, timeout }
    }

    /// Finds a character by name or guid together with its guild name.
    ///
    /// Names are matched case-insensitively. With a game master filter, characters of
    /// game master accounts on the realm are not found.
    ///
    /// # Arguments
    /// - `key` - Character name or guid
    /// - `game_masters` - Game master accounts to hide, `None` to show everyone
    ///
    /// # Returns
    /// - `Ok(Some(CharacterData))` - Character found
    /// - `Ok(None)` - No visible character matches
    /// - `Err(QueryError)` - Query failed or timed out
    pub async fn find(
        &self,
        key: CharacterKey<'_>,
        game_masters: Option<&GameMasterFilter>,
    ) -> Result<Option<CharacterData>, QueryError> {
        let (condition, value) = match key {
            CharacterKey::Name(name) => (
                "LOWER(`characters`.`name`) = LOWER(?)",
                Value::from(name.to_string()),
            ),
            CharacterKey::Guid(guid) => ("`characters`.`guid` = ?", Value::from(guid)),
        };

        let mut sql = String::from(
            "SELECT `characters`.`guid` AS `guid`, `characters`.`name` AS `name`, \
             `characters`.`race` AS `race`, `characters`.`class` AS `class`, \
             `characters`.`gender` AS `gender`, `characters`.`level` AS `level`, \
             `characters`.`skin` AS `skin`, `characters`.`face` AS `face`, \
             `characters`.`hairStyle` AS `hair_style`, `characters`.`hairColor` AS `hair_color`, \
             `characters`.`facialStyle` AS `facial_style`, `characters`.`playerFlags` AS `player_flags`, \
             `characters`.`online` AS `online`, `guild`.`name` AS `guild` \
             FROM `characters` \
             LEFT JOIN `guild_member` ON `guild_member`.`guid` = `characters`.`guid` \
             LEFT JOIN `guild` ON `guild`.`guildid` = `guild_member`.`guildid`",
        );
        if let Some(filter) = game_masters {
            sql.push_str(&format!(
                " LEFT JOIN `{}`.`account_access` ON `account_access`.`id` = `characters`.`account` AND {}",
                filter.auth_database,
                filter.join_on()
            ));
        }
        sql.push_str(" WHERE ");
        sql.push_str(condition);
        if game_masters.is_some() {
            sql.push_str(" AND `account_access`.`id` IS NULL");
        }

        let row = query_one(self.db, self.timeout, sql, vec![value]).await?;

        match row {
            Some(row) => Ok(Some(CharacterData::from_query_result(&row, "")?)),
            None => Ok(None),
        }
    }

    /// Gets the items equipped by a character, in no particular order.
    pub async fn get_equipment(&self, guid: u32) -> Result<Vec<EquipmentRow>, QueryError> {
        let rows = with_timeout(
            self.timeout,
            entity::prelude::CharacterInventory::find()
                .filter(entity::character_inventory::Column::Guid.eq(guid))
                .filter(entity::character_inventory::Column::Bag.eq(0))
                .filter(entity::character_inventory::Column::Slot.between(
                    *EQUIPMENT_SLOTS.start(),
                    *EQUIPMENT_SLOTS.end(),
                ))
                .find_also_related(entity::prelude::ItemInstance)
                .all(self.db),
        )
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(inventory, item)| item.map(|item| EquipmentRow::from_entity(inventory, item)))
            .collect())
    }

    /// Returns which of `spells` the character has learned.
    ///
    /// # Arguments
    /// - `guid` - Character guid
    /// - `spells` - Candidate spell ids; an empty list matches nothing
    pub async fn get_learned_spells(&self, guid: u32, spells: &[u32]) -> Result<Vec<u32>, QueryError> {
        if spells.is_empty() {
            return Ok(Vec::new());
        }

        let rows = with_timeout(
            self.timeout,
            entity::prelude::CharacterSpell::find()
                .filter(entity::character_spell::Column::Guid.eq(guid))
                .filter(entity::character_spell::Column::Spell.is_in(spells.iter().copied()))
                .all(self.db),
        )
        .await?;

        Ok(rows.into_iter().map(|row| row.spell).collect())
    }

    pub async fn get_talents(
        &self,
        guid: u32,
    ) -> Result<Vec<entity::character_talent::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::CharacterTalent::find()
                .filter(entity::character_talent::Column::Guid.eq(guid))
                .all(self.db),
        )
        .await
    }

    /// Gets the glyph slots of both talent groups.
    pub async fn get_glyphs(
        &self,
        guid: u32,
    ) -> Result<Vec<entity::character_glyphs::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::CharacterGlyphs::find()
                .filter(entity::character_glyphs::Column::Guid.eq(guid))
                .order_by_asc(entity::character_glyphs::Column::TalentGroup)
                .all(self.db),
        )
        .await
    }

    pub async fn get_achievements(
        &self,
        guid: u32,
    ) -> Result<Vec<entity::character_achievement::Model>, QueryError> {
        with_timeout(
            self.timeout,
            entity::prelude::CharacterAchievement::find()
                .filter(entity::character_achievement::Column::Guid.eq(guid))
                .all(self.db),
        )
        .await
    }

    /// Gets the honorable kill counters of a character.
    ///
    /// # Returns
    /// - `Ok(Some(PvpKills))` - Counters of the character
    /// - `Ok(None)` - Character does not exist
    /// - `Err(QueryError)` - Query failed or timed out
    pub async fn get_kills(&self, guid: u32) -> Result<Option<PvpKills>, QueryError> {
        let character = with_timeout(
            self.timeout,
            entity::prelude::Characters::find_by_id(guid).one(self.db),
        )
        .await?;

        Ok(character.as_ref().map(PvpKills::from_entity))
    }

    /// Gets the arena teams a character is a member of, smallest team size first.
    pub async fn get_arena_teams(
        &self,
        guid: u32,
    ) -> Result<Vec<entity::arena_team::Model>, QueryError> {
        let rows = with_timeout(
            self.timeout,
            entity::prelude::ArenaTeamMember::find()
                .filter(entity::arena_team_member::Column::Guid.eq(guid))
                .find_also_related(entity::prelude::ArenaTeam)
                .order_by_asc(entity::arena_team::Column::Type)
                .all(self.db),
        )
        .await?;

        Ok(rows.into_iter().filter_map(|(_, team)| team).collect())
    }
}
