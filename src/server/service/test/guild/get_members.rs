use super::*;

/// Tests the member grid of a guild with a deleted member and a member of another guild.
///
/// Expected: Ok with only the live members, formatted class, race and online cells and
/// HTML-escaped rank names
#[tokio::test]
async fn lists_live_members_with_ranks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let (leader, guild) = factory::helpers::create_guild_with_leader(db).await?;
    let (_, other_guild) = factory::helpers::create_guild_with_leader(db).await?;
    let jaina = factory::character::CharacterFactory::new(db)
        .name("Jaina")
        .class(8)
        .gender(1)
        .online(true)
        .build()
        .await?;
    let deleted = factory::character::CharacterFactory::new(db)
        .deleted()
        .build()
        .await?;
    let stranger = factory::create_character(db).await?;
    factory::create_guild_member(db, guild.guildid, jaina.guid, 1).await?;
    factory::create_guild_member(db, guild.guildid, deleted.guid, 1).await?;
    factory::create_guild_member(db, other_guild.guildid, stranger.guid, 1).await?;
    factory::create_guild_rank(db, guild.guildid, 0, "Guild Master").await?;
    factory::create_guild_rank(db, guild.guildid, 1, "<Officer>").await?;

    let service = GuildService::new(&armory.state, armory.realm());
    let members = service
        .get_members(guild.guildid, &grid_request(&[("draw", "3")]))
        .await
        .unwrap();

    assert_eq!(members.grid.draw, 3);
    assert_eq!(members.grid.records_total, 2);
    assert_eq!(
        members.grid.data,
        vec![
            vec![
                json!(leader.name),
                json!(0),
                json!(80),
                json!("warrior"),
                json!("human_male"),
                json!(false),
                json!(0),
            ],
            vec![
                json!("Jaina"),
                json!(1),
                json!(80),
                json!("mage"),
                json!("human_female"),
                json!(true),
                json!(1),
            ],
        ]
    );
    assert_eq!(members.ranks[&0], "Guild Master");
    assert_eq!(members.ranks[&1], "&lt;Officer&gt;");

    Ok(())
}

/// Tests the member grid with game masters hidden.
///
/// Expected: Ok without the game master's row
#[tokio::test]
async fn hides_game_master_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, true).await;

    let (leader, guild) = factory::helpers::create_guild_with_leader(db).await?;
    let gm = factory::create_character(db).await?;
    factory::create_guild_member(db, guild.guildid, gm.guid, 2).await?;
    factory::account::create_account_access(db, gm.account, 3, REALM_ID).await?;

    let service = GuildService::new(&armory.state, armory.realm());
    let members = service
        .get_members(guild.guildid, &grid_request(&[]))
        .await
        .unwrap();

    assert_eq!(members.grid.records_total, 1);
    assert_eq!(members.grid.data[0][0], json!(leader.name));

    Ok(())
}

/// Tests the member grid of an unknown guild.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_guild_members_are_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let service = GuildService::new(&armory.state, armory.realm());
    let result = service.get_members(987654, &grid_request(&[])).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
