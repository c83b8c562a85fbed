use super::*;

/// Searched request matching character names and guild names.
fn search(term: &str) -> crate::server::ssp::request::SspRequest {
    grid_request(&[
        ("search[value]", term),
        ("columns[0][data]", "0"),
        ("columns[0][searchable]", "true"),
        ("columns[1][data]", "4"),
        ("columns[1][searchable]", "true"),
    ])
}

/// Tests a search matching one character by name and another by guild name.
///
/// Expected: Ok with both characters, their guild cell and the raw gender last
#[tokio::test]
async fn matches_character_and_guild_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let tyrande = factory::character::CharacterFactory::new(db)
        .name("Tyrande")
        .race(4)
        .class(5)
        .gender(1)
        .level(80)
        .build()
        .await?;
    let guild = factory::guild::GuildFactory::new(db)
        .name("Moonguard")
        .leader(tyrande.guid)
        .build()
        .await?;
    let shandris = factory::character::CharacterFactory::new(db)
        .name("Shandris")
        .race(4)
        .class(3)
        .gender(1)
        .level(75)
        .build()
        .await?;
    factory::create_guild_member(db, guild.guildid, shandris.guid, 1).await?;
    factory::create_character_named(db, "Arthas").await?;

    let result = SearchService::new(&armory.state)
        .search_characters(None, &search("moon"))
        .await
        .unwrap();

    assert_eq!(result.realm, REALM);
    assert_eq!(result.grid.records_total, 3);
    assert_eq!(result.grid.records_filtered, 1);
    assert_eq!(
        result.grid.data,
        vec![vec![
            json!("Shandris"),
            json!(75),
            json!("hunter"),
            json!("nightelf_female"),
            json!("Moonguard"),
            json!(1),
        ]]
    );

    let by_name = SearchService::new(&armory.state)
        .search_characters(Some(REALM), &search("tyr"))
        .await
        .unwrap();

    assert_eq!(by_name.grid.data.len(), 1);
    assert_eq!(by_name.grid.data[0][0], json!("Tyrande"));
    assert_eq!(by_name.grid.data[0][4], serde_json::Value::Null);

    Ok(())
}

/// Tests that deleted characters and game masters never show up.
///
/// Expected: Ok with only the regular live character
#[tokio::test]
async fn excludes_deleted_characters_and_game_masters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, true).await;

    factory::create_character_named(db, "Uther").await?;
    factory::character::CharacterFactory::new(db)
        .name("Gone")
        .deleted()
        .build()
        .await?;
    let gm = factory::create_character_named(db, "Staff").await?;
    factory::account::create_account_access(db, gm.account, 2, -1).await?;

    let result = SearchService::new(&armory.state)
        .search_characters(None, &grid_request(&[]))
        .await
        .unwrap();

    assert_eq!(result.grid.records_total, 1);
    assert_eq!(result.grid.data[0][0], json!("Uther"));

    Ok(())
}

/// Tests that a game master level scoped to another realm does not hide a character.
///
/// Expected: Ok with the character listed
#[tokio::test]
async fn game_master_of_another_realm_is_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, true).await;

    let character = factory::create_character_named(db, "Visitor").await?;
    factory::account::create_account_access(db, character.account, 3, REALM_ID + 1).await?;

    let result = SearchService::new(&armory.state)
        .search_characters(None, &grid_request(&[]))
        .await
        .unwrap();

    assert_eq!(result.grid.records_total, 1);

    Ok(())
}

/// Tests a search on a realm that is not configured.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_realm() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let result = SearchService::new(&armory.state)
        .search_characters(Some("Lordaeron"), &grid_request(&[]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
