//! Character pages: sheet, equipment, talents, achievements and PvP.

pub mod achievements;
pub mod customization;
pub mod equipment;
pub mod lookups;
pub mod talents;

use crate::{
    model::character::{
        AchievementsDataDto, CharacterDto, CharacterModelDto, CharacterPvpDto, CharacterSheetDto,
        CharacterTalentsDto, TalentsDataDto,
    },
    server::{
        data::character::CharacterRepository,
        error::AppError,
        model::character::{arena_team_summary, CharacterData, CharacterKey},
        state::{AppState, Realm},
        util::game::Faction,
    },
};

pub struct CharacterService<'a> {
    state: &'a AppState,
    realm: &'a Realm,
}

impl<'a> CharacterService<'a> {
    pub fn new(state: &'a AppState, realm: &'a Realm) -> Self {
        Self { state, realm }
    }

    fn repository(&self) -> CharacterRepository<'a> {
        CharacterRepository::new(&self.realm.db, self.state.query_timeout())
    }

    /// Finds a visible character or fails with `NotFound`.
    async fn find(&self, key: CharacterKey<'_>) -> Result<CharacterData, AppError> {
        let filter = self.state.game_master_filter(self.realm);

        self.repository()
            .find(key, filter.as_ref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Character {:?} not found", key)))
    }

    fn sheet(&self, character: &CharacterData, page: Option<&str>) -> CharacterSheetDto {
        let title = match page {
            Some(page) => format!("Armory - {} - {}", character.name, page),
            None => format!("Armory - {}", character.name),
        };

        character.to_sheet_dto(self.realm.name(), title)
    }

    /// Gets the character page with equipment, model viewer data and mounts.
    ///
    /// # Arguments
    /// - `name` - Character name, matched case-insensitively
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - Sheet and model data
    /// - `Err(AppError::NotFound)` - No visible character with that name
    /// - `Err(AppError)` - Query failed or timed out
    pub async fn get_character(&self, name: &str) -> Result<CharacterDto, AppError> {
        let character = self.find(CharacterKey::Name(name)).await?;
        let repo = self.repository();
        let lookups = &self.state.lookups;

        let mut equipped = repo.get_equipment(character.guid).await?;
        equipped.sort_by_key(|row| row.slot);

        let customization_options = self
            .state
            .customization
            .get(character.race, character.gender)
            .map(|data| customization::resolve(data, &character))
            .unwrap_or_default();

        let mounts = repo
            .get_learned_spells(character.guid, lookups.mount_spells())
            .await?
            .into_iter()
            .filter_map(|spell| lookups.mount(spell as i64).cloned())
            .collect();

        let data = CharacterModelDto {
            race: character.race,
            gender: character.gender,
            class: character.class,
            flags: character.player_flags,
            character_model_items: equipment::model_items(&equipped, character.class, lookups),
            customization_options,
            equipment: equipped
                .iter()
                .map(|row| equipment::equipment_dto(row, lookups))
                .collect(),
            mounts,
        };

        Ok(CharacterDto {
            sheet: self.sheet(&character, None),
            data,
        })
    }

    /// Gets the talents page: both talent specs, the class's talent trees and glyphs.
    pub async fn get_talents(&self, name: &str) -> Result<CharacterTalentsDto, AppError> {
        let character = self.find(CharacterKey::Name(name)).await?;
        let repo = self.repository();
        let dbc = &self.state.dbc;

        let learned = repo.get_talents(character.guid).await?;
        let glyph_rows = repo.get_glyphs(character.guid).await?;

        let data = TalentsDataDto {
            talents: talents::split_specs(&learned),
            trees: talents::talent_trees(dbc, character.class).await?,
            glyphs: talents::glyph_spells(dbc, &glyph_rows).await?,
        };

        Ok(CharacterTalentsDto {
            sheet: self.sheet(&character, Some("Talents")),
            data,
        })
    }

    /// Gets the achievements page header; the listing is loaded separately by guid.
    pub async fn get_achievements_sheet(&self, name: &str) -> Result<CharacterSheetDto, AppError> {
        let character = self.find(CharacterKey::Name(name)).await?;

        Ok(self.sheet(&character, Some("Achievements")))
    }

    /// Gets the achievement listing of a character.
    ///
    /// # Arguments
    /// - `guid` - Character guid
    ///
    /// # Returns
    /// - `Ok(AchievementsDataDto)` - Categories, achievements of the character's faction
    ///   and earned dates
    /// - `Err(AppError::NotFound)` - No visible character with that guid
    /// - `Err(AppError)` - Query failed or reference data could not be read
    pub async fn get_achievements_data(&self, guid: u32) -> Result<AchievementsDataDto, AppError> {
        let character = self.find(CharacterKey::Guid(guid)).await?;
        let dbc = &self.state.dbc;
        let lookups = &self.state.lookups;

        let icons = talents::spell_icon_names(dbc).await?;
        let rows = self.repository().get_achievements(character.guid).await?;

        Ok(AchievementsDataDto {
            categories: achievements::categories(dbc).await?,
            achievements: achievements::available(
                lookups,
                &icons,
                Faction::from_race(character.race),
            ),
            earned: achievements::earned(lookups, rows),
        })
    }

    /// Gets the PvP page: faction, honorable kills and arena teams by team size.
    pub async fn get_pvp(&self, name: &str) -> Result<CharacterPvpDto, AppError> {
        let character = self.find(CharacterKey::Name(name)).await?;
        let repo = self.repository();

        let kills = repo
            .get_kills(character.guid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Character {} not found", character.guid)))?;
        let arena_teams = repo
            .get_arena_teams(character.guid)
            .await?
            .into_iter()
            .map(arena_team_summary)
            .collect();

        Ok(CharacterPvpDto {
            sheet: self.sheet(&character, Some("PvP")),
            faction: Faction::from_race(character.race).id(),
            kills: kills.into_dto(),
            arena_teams,
        })
    }
}
