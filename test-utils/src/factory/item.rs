//! Item factories for equipped character items and world item templates.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an item instance and places it in an equipment slot of a character.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Owning character guid
/// - `slot` - Equipment slot (bag 0)
/// - `item_entry` - Item template id
/// - `enchantments` - Space separated enchantment column as stored by the server
///
/// # Returns
/// - `Ok((item_instance, inventory))` - Created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_equipped_item(
    db: &DatabaseConnection,
    guid: u32,
    slot: u8,
    item_entry: u32,
    enchantments: impl Into<String>,
) -> Result<
    (
        entity::item_instance::Model,
        entity::character_inventory::Model,
    ),
    DbErr,
> {
    create_inventory_item(db, guid, 0, slot, item_entry, enchantments).await
}

/// Creates an item instance in any bag and slot of a character.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Owning character guid
/// - `bag` - Bag item guid, 0 for the character's own slots
/// - `slot` - Slot inside the bag
/// - `item_entry` - Item template id
/// - `enchantments` - Space separated enchantment column
///
/// # Returns
/// - `Ok((item_instance, inventory))` - Created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_inventory_item(
    db: &DatabaseConnection,
    guid: u32,
    bag: u32,
    slot: u8,
    item_entry: u32,
    enchantments: impl Into<String>,
) -> Result<
    (
        entity::item_instance::Model,
        entity::character_inventory::Model,
    ),
    DbErr,
> {
    let item_guid = next_id();

    let instance = entity::item_instance::ActiveModel {
        guid: ActiveValue::Set(item_guid),
        item_entry: ActiveValue::Set(item_entry),
        flags: ActiveValue::Set(0),
        enchantments: ActiveValue::Set(enchantments.into()),
        random_property_id: ActiveValue::Set(0),
    }
    .insert(db)
    .await?;

    let inventory = entity::character_inventory::ActiveModel {
        guid: ActiveValue::Set(guid),
        bag: ActiveValue::Set(bag),
        slot: ActiveValue::Set(slot),
        item: ActiveValue::Set(item_guid),
    }
    .insert(db)
    .await?;

    Ok((instance, inventory))
}

/// Creates a world item template.
///
/// # Arguments
/// - `db` - Database connection
/// - `entry` - Item id
/// - `socket_bonus` - Enchantment granted when all sockets match, 0 for none
///
/// # Returns
/// - `Ok(entity::item_template::Model)` - Created template
/// - `Err(DbErr)` - Database error during insert
pub async fn create_item_template(
    db: &DatabaseConnection,
    entry: u32,
    socket_bonus: i32,
) -> Result<entity::item_template::Model, DbErr> {
    entity::item_template::ActiveModel {
        entry: ActiveValue::Set(entry),
        name: ActiveValue::Set(format!("Item {}", entry)),
        socket_bonus: ActiveValue::Set(socket_bonus),
    }
    .insert(db)
    .await
}
