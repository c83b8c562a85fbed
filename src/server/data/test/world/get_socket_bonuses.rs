use super::*;

/// Tests mapping items to their socket bonus.
///
/// Expected: Ok with only items that have a bonus
#[tokio::test]
async fn maps_items_with_socket_bonus() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_world_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_item_template(db, 19019, 3307).await?;
    factory::create_item_template(db, 2105, 0).await?;

    let repo = ItemTemplateRepository::new(db, TIMEOUT);
    let bonuses = repo.get_socket_bonuses().await.unwrap();

    assert_eq!(bonuses.len(), 1);
    assert_eq!(bonuses.get(&19019), Some(&3307));

    Ok(())
}
