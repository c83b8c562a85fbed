use super::*;

/// Tests reading equipped items.
///
/// Verifies that only items in the character's own equipment slots (bag 0, slots
/// 0 to 18) are returned, with the stored enchantment string.
///
/// Expected: Ok with the two equipped items
#[tokio::test]
async fn gets_items_in_equipment_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    factory::create_equipped_item(db, character.guid, 15, 19019, "3789 0 0 ").await?;
    factory::create_equipped_item(db, character.guid, 18, 30000, "").await?;
    // Backpack slot and an item inside a bag are not equipment
    factory::create_equipped_item(db, character.guid, 23, 2105, "").await?;
    factory::item::create_inventory_item(db, character.guid, 77, 1, 2105, "").await?;

    let other = factory::create_character(db).await?;
    factory::create_equipped_item(db, other.guid, 15, 19019, "").await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let mut equipment = repo.get_equipment(character.guid).await.unwrap();
    equipment.sort_by_key(|row| row.slot);

    assert_eq!(equipment.len(), 2);
    assert_eq!(equipment[0].slot, 15);
    assert_eq!(equipment[0].item_entry, 19019);
    assert_eq!(equipment[0].enchantments, "3789 0 0 ");
    assert_eq!(equipment[1].slot, 18);
    assert_eq!(equipment[1].item_entry, 30000);

    Ok(())
}

/// Tests a character without items.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let equipment = repo.get_equipment(character.guid).await.unwrap();

    assert!(equipment.is_empty());

    Ok(())
}
