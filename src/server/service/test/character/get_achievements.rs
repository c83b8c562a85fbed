use super::*;

/// Tests the achievements page header.
///
/// Expected: Ok with the achievements title
#[tokio::test]
async fn builds_achievements_sheet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    factory::create_character_named(db, "Sylvanas").await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let sheet = service.get_achievements_sheet("Sylvanas").await.unwrap();

    assert_eq!(sheet.title, "Armory - Sylvanas - Achievements");
    assert_eq!(sheet.realm, REALM);

    Ok(())
}

/// Tests the achievement listing of a Horde character by guid.
///
/// Expected: Ok with neutral and Horde achievements and the earned dates of known ids
#[tokio::test]
async fn lists_faction_achievements_and_earned_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let character = factory::character::CharacterFactory::new(db)
        .race(2)
        .build()
        .await?;
    factory::progress::create_character_achievement(db, character.guid, 6, 1_262_304_000)
        .await?;
    factory::progress::create_character_achievement(db, character.guid, 963, 1_262_400_000)
        .await?;
    factory::progress::create_character_achievement(db, character.guid, 9999, 1).await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let data = service.get_achievements_data(character.guid).await.unwrap();

    let ids: Vec<i64> = data.achievements.iter().map(|achievement| achievement.id).collect();
    assert_eq!(ids, vec![6, 963]);
    assert_eq!(data.achievements[0].icon, "achievement_level_10");
    assert_eq!(data.categories.len(), 2);
    assert_eq!(data.earned.keys().copied().collect::<Vec<_>>(), vec![6, 963]);
    assert_eq!(data.earned[&963].date, 1_262_400_000);

    Ok(())
}

/// Tests the achievement listing of an unknown guid.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_guid_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let service = CharacterService::new(&armory.state, armory.realm());
    let result = service.get_achievements_data(424242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
