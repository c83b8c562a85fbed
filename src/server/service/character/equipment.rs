//! Equipment enrichment and model viewer items.

use crate::{
    model::character::EquipmentDto,
    server::{
        model::character::{
            EquipmentRow, CLASS_HUNTER, GUILD_TABARD_ITEM, RANGED_SLOT, VISIBLE_SLOTS,
        },
        service::character::lookups::CharacterLookups,
    },
};

/// Adds item class, icon, gems and displayable enchantments to an equipped item.
pub fn equipment_dto(row: &EquipmentRow, lookups: &CharacterLookups) -> EquipmentDto {
    let item = row.item_entry as i64;
    let enchantments = row.enchantment_ids();
    let class = lookups.item_class(item);

    EquipmentDto {
        slot: row.slot,
        item_entry: row.item_entry,
        flags: row.flags,
        random_property_id: row.random_property_id as i32,
        class_id: class.map(|(class_id, _)| class_id),
        subclass_id: class.map(|(_, subclass_id)| subclass_id),
        icon: lookups.item_icon(item).map(str::to_string),
        gems: lookups.gems(&enchantments),
        enchantments: lookups.enchantments(item, &enchantments),
    }
}

/// `[inventoryType, itemDisplayInfoId]` pairs drawn by the model viewer.
///
/// Only visible slots are drawn; the ranged slot only for hunters and never the guild
/// tabard. Items without a retail inventory type or appearance are left out.
///
/// # Arguments
/// - `equipment` - Equipped items in slot order
/// - `class` - Character class id
pub fn model_items(
    equipment: &[EquipmentRow],
    class: u8,
    lookups: &CharacterLookups,
) -> Vec<[i64; 2]> {
    equipment
        .iter()
        .filter(|row| class == CLASS_HUNTER || row.slot != RANGED_SLOT)
        .filter(|row| VISIBLE_SLOTS.contains(&row.slot) && row.item_entry != GUILD_TABARD_ITEM)
        .filter_map(|row| {
            let item = row.item_entry as i64;
            let display = lookups.item_display_info(item)?;
            let inventory_type = lookups.inventory_type(item)?;

            Some([inventory_type, display])
        })
        .collect()
}
