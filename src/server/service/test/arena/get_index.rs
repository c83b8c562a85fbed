use super::*;

/// Tests the ladder landing page.
///
/// Expected: the ladder title and the configured realm names
#[tokio::test]
async fn lists_configured_realms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let index = ArenaService::new(&armory.state).get_index();

    assert_eq!(index.title, "Arena Ladder");
    assert_eq!(index.realms, vec![REALM.to_string()]);

    Ok(())
}
