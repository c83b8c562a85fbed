//! Lookup tables built once from reference data at startup.

use std::collections::{HashMap, HashSet};

use crate::{
    model::character::MountDto,
    server::{
        dbc::{catalog::DbcCatalog, table::AchievementRow},
        error::dbc::DbcError,
        util::game::spell_icon_name,
    },
};

/// Item class of gems in the item extract.
const ITEM_CLASS_GEM: i64 = 3;
/// Spell mechanic of mount spells.
const SPELL_MECHANIC_MOUNTED: i64 = 21;

/// Item and spell lookups used to enrich character pages.
#[derive(Debug, Default)]
pub struct CharacterLookups {
    /// Item id to the retail inventory type the model viewer expects.
    inventory_types: HashMap<i64, i64>,
    /// Item id to `(classId, subclassId)`.
    item_classes: HashMap<i64, (i64, i64)>,
    /// Item id to inventory icon name.
    item_icons: HashMap<i64, String>,
    gem_items: HashSet<i64>,
    /// Enchantment id to the item that applies it.
    enchant_src_items: HashMap<i64, i64>,
    /// Item id to the enchantment granted when every socket matches.
    socket_bonuses: HashMap<i64, i64>,
    /// Item id to the item display info of its first modified appearance.
    appearances: HashMap<i64, i64>,
    /// Mount spells that have a mount and display, keyed by spell id.
    mounts: HashMap<i64, MountDto>,
    mount_spells: Vec<u32>,
    achievements: Vec<AchievementRow>,
    achievement_index: HashMap<i64, usize>,
}

impl CharacterLookups {
    /// Builds every lookup from the catalog.
    ///
    /// # Arguments
    /// - `dbc` - Reference data catalog, eager or streaming
    /// - `socket_bonuses` - Item id to socket bonus enchantment, from the world database
    ///
    /// # Returns
    /// - `Ok(CharacterLookups)` - Lookups ready for request handling
    /// - `Err(DbcError)` - An extract could not be read
    pub async fn build(
        dbc: &DbcCatalog,
        socket_bonuses: HashMap<i64, i64>,
    ) -> Result<Self, DbcError> {
        let items = dbc.item().collect().await?;

        let retail: HashMap<i64, i64> = dbc
            .item_retail()
            .map(|row| (row.id, row.inventory_type))
            .collect()
            .await?
            .into_iter()
            .collect();
        let display_icons: HashMap<i64, String> = dbc
            .item_display_info()
            .map(|row| (row.id, row.inventory_icon0))
            .collect()
            .await?
            .into_iter()
            .collect();

        let mut lookups = Self {
            socket_bonuses,
            ..Self::default()
        };

        for item in &items {
            if let Some(inventory_type) = retail.get(&item.id) {
                lookups.inventory_types.insert(item.id, *inventory_type);
            }
            if let Some(icon) = display_icons.get(&item.display_info_id) {
                lookups.item_icons.insert(item.id, icon.clone());
            }
            if item.class_id == ITEM_CLASS_GEM {
                lookups.gem_items.insert(item.id);
            }
            lookups
                .item_classes
                .insert(item.id, (item.class_id, item.subclass_id));
        }

        lookups.enchant_src_items = dbc
            .spell_item_enchantment()
            .map(|row| (row.id, row.src_item_id))
            .collect()
            .await?
            .into_iter()
            .collect();

        lookups.appearances = Self::build_appearances(dbc).await?;
        lookups.build_mounts(dbc).await?;

        lookups.achievements = dbc.achievement().collect().await?;
        lookups.achievement_index = lookups
            .achievements
            .iter()
            .enumerate()
            .map(|(index, achievement)| (achievement.id, index))
            .collect();

        tracing::info!(
            "Built character lookups: {} items, {} gems, {} mounts, {} achievements",
            items.len(),
            lookups.gem_items.len(),
            lookups.mounts.len(),
            lookups.achievements.len()
        );

        Ok(lookups)
    }

    async fn build_appearances(dbc: &DbcCatalog) -> Result<HashMap<i64, i64>, DbcError> {
        let display_ids: HashMap<i64, i64> = dbc
            .item_appearance()
            .map(|row| (row.id, row.item_display_info_id))
            .collect()
            .await?
            .into_iter()
            .collect();

        let mut appearances = HashMap::new();
        for modified in dbc.item_modified_appearance().collect().await? {
            if appearances.contains_key(&modified.item_id) {
                continue;
            }
            // Only the first modified appearance of an item is considered.
            appearances.insert(
                modified.item_id,
                display_ids.get(&modified.item_appearance_id).copied(),
            );
        }

        Ok(appearances
            .into_iter()
            .filter_map(|(item, display)| display.map(|display| (item, display)))
            .collect())
    }

    async fn build_mounts(&mut self, dbc: &DbcCatalog) -> Result<(), DbcError> {
        let spells = dbc
            .spell()
            .filter(|spell| spell.mechanic == SPELL_MECHANIC_MOUNTED)
            .collect()
            .await?;
        let icons: HashMap<i64, String> = dbc
            .spell_icon()
            .map(|row| (row.id, spell_icon_name(&row.texture_filename)))
            .collect()
            .await?
            .into_iter()
            .collect();

        // First row wins, matching a scan in extract order.
        let mut mounts: HashMap<i64, i64> = HashMap::new();
        for mount in dbc.mount().collect().await? {
            mounts.entry(mount.source_spell_id).or_insert(mount.id);
        }
        let mut displays: HashMap<i64, i64> = HashMap::new();
        for display in dbc.mount_display().collect().await? {
            displays
                .entry(display.mount_id)
                .or_insert(display.creature_display_info_id);
        }

        for spell in spells {
            self.mount_spells.push(spell.id as u32);

            let Some(creature_display_id) = mounts
                .get(&spell.id)
                .and_then(|mount| displays.get(mount))
                .copied()
            else {
                continue;
            };

            self.mounts.insert(
                spell.id,
                MountDto {
                    creature_display_id,
                    spell: spell.id,
                    icon: icons.get(&spell.spell_icon_id).cloned().unwrap_or_default(),
                },
            );
        }

        Ok(())
    }

    pub fn inventory_type(&self, item: i64) -> Option<i64> {
        self.inventory_types.get(&item).copied()
    }

    pub fn item_class(&self, item: i64) -> Option<(i64, i64)> {
        self.item_classes.get(&item).copied()
    }

    pub fn item_icon(&self, item: i64) -> Option<&str> {
        self.item_icons.get(&item).map(String::as_str)
    }

    pub fn item_display_info(&self, item: i64) -> Option<i64> {
        self.appearances.get(&item).copied()
    }

    /// Spell ids with the mounted mechanic, including those without a mount row.
    pub fn mount_spells(&self) -> &[u32] {
        &self.mount_spells
    }

    pub fn mount(&self, spell: i64) -> Option<&MountDto> {
        self.mounts.get(&spell)
    }

    pub fn achievements(&self) -> &[AchievementRow] {
        &self.achievements
    }

    pub fn achievement(&self, id: i64) -> Option<&AchievementRow> {
        self.achievement_index
            .get(&id)
            .and_then(|index| self.achievements.get(*index))
    }

    /// Gem item ids socketed into an item.
    ///
    /// # Arguments
    /// - `enchantments` - Enchantment ids of the item instance
    ///
    /// # Returns
    /// - Source items of the enchantments that come from gems, in enchantment order
    pub fn gems(&self, enchantments: &[i64]) -> Vec<i64> {
        enchantments
            .iter()
            .filter_map(|enchant| self.enchant_src_items.get(enchant))
            .filter(|item| self.gem_items.contains(*item))
            .copied()
            .collect()
    }

    /// Enchantments to display for an item.
    ///
    /// Keeps known enchantments that are neither applied by a gem nor the item's socket
    /// bonus.
    pub fn enchantments(&self, item: i64, enchantments: &[i64]) -> Vec<i64> {
        let socket_bonus = self.socket_bonuses.get(&item);

        enchantments
            .iter()
            .filter(|enchant| match self.enchant_src_items.get(*enchant) {
                Some(src_item) => !self.gem_items.contains(src_item),
                None => false,
            })
            .filter(|enchant| Some(*enchant) != socket_bonus)
            .copied()
            .collect()
    }
}
