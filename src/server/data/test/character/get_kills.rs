use super::*;

/// Tests reading honorable kill counters.
///
/// Expected: Ok(Some) with the stored counters
#[tokio::test]
async fn gets_kill_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .kills(1200, 15, 30)
        .build()
        .await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let kills = repo.get_kills(character.guid).await.unwrap().unwrap();

    assert_eq!(kills.total, 1200);
    assert_eq!(kills.today, 15);
    assert_eq!(kills.yesterday, 30);

    Ok(())
}

/// Tests kill counters of a missing character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db, TIMEOUT);
    let kills = repo.get_kills(999_999).await.unwrap();

    assert!(kills.is_none());

    Ok(())
}
