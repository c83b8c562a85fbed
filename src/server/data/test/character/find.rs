use super::*;

/// Tests finding a character by name regardless of case.
///
/// Expected: Ok(Some) with the stored name and appearance
#[tokio::test]
async fn finds_character_by_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Arthas")
        .race(1)
        .class(6)
        .appearance(3, 4, 5, 6, 7)
        .online(true)
        .build()
        .await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let character = repo
        .find(CharacterKey::Name("aRTHAS"), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(character.guid, created.guid);
    assert_eq!(character.name, "Arthas");
    assert_eq!(character.class, 6);
    assert_eq!(character.skin, 3);
    assert_eq!(character.face, 4);
    assert_eq!(character.hair_style, 5);
    assert_eq!(character.hair_color, 6);
    assert_eq!(character.facial_style, 7);
    assert_eq!(character.online, 1);
    assert_eq!(character.guild, None);

    Ok(())
}

/// Tests finding a character by guid with its guild name.
///
/// Expected: Ok(Some) with the guild name filled in
#[tokio::test]
async fn finds_character_by_guid_with_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, guild) = factory::helpers::create_guild_with_leader(db).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let character = repo
        .find(CharacterKey::Guid(leader.guid), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(character.name, leader.name);
    assert_eq!(character.guild, Some(guild.name));

    Ok(())
}

/// Tests that an unknown name is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character_named(db, "Jaina").await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let character = repo.find(CharacterKey::Name("Thrall"), None).await.unwrap();

    assert!(character.is_none());

    Ok(())
}

/// Tests that game master characters are hidden on their realm and on all realms.
///
/// Verifies that realm -1 and the filtered realm id hide the character while a
/// game master level on another realm, or level 0, does not.
///
/// Expected: only the regular characters are found
#[tokio::test]
async fn hides_game_masters_when_filtered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let global_gm = factory::create_character_named(db, "GlobalGm").await?;
    factory::account::create_account_access(db, global_gm.account, 3, -1).await?;
    let realm_gm = factory::create_character_named(db, "RealmGm").await?;
    factory::account::create_account_access(db, realm_gm.account, 1, 1).await?;
    let other_realm_gm = factory::create_character_named(db, "OtherRealmGm").await?;
    factory::account::create_account_access(db, other_realm_gm.account, 3, 2).await?;
    let player = factory::create_character_named(db, "Player").await?;
    factory::account::create_account_access(db, player.account, 0, 1).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let filter = game_masters(1);

    assert!(!is_visible(&repo, &filter, "GlobalGm").await);
    assert!(!is_visible(&repo, &filter, "RealmGm").await);
    assert!(is_visible(&repo, &filter, "OtherRealmGm").await);
    assert!(is_visible(&repo, &filter, "Player").await);

    // Without the filter game masters are visible
    assert!(repo
        .find(CharacterKey::Name("GlobalGm"), None)
        .await
        .unwrap()
        .is_some());

    Ok(())
}

async fn is_visible(
    repo: &CharacterRepository<'_>,
    filter: &GameMasterFilter,
    name: &str,
) -> bool {
    repo.find(CharacterKey::Name(name), Some(filter))
        .await
        .unwrap()
        .is_some()
}
