use super::*;

/// Tests finding a guild and its leader.
///
/// Expected: Ok(Some) for the guild and its leader character
#[tokio::test]
async fn finds_guild_and_leader() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, guild) = factory::helpers::create_guild_with_leader(db).await?;

    let repo = GuildRepository::new(db, TIMEOUT);
    let found = repo.find_by_name(&guild.name).await.unwrap().unwrap();
    assert_eq!(found.guildid, guild.guildid);

    let found_leader = repo.find_leader(&found).await.unwrap().unwrap();
    assert_eq!(found_leader.guid, leader.guid);

    Ok(())
}

/// Tests that an unknown guild name is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_guild_with_leader(db).await?;

    let repo = GuildRepository::new(db, TIMEOUT);
    let found = repo.find_by_name("No Such Guild").await.unwrap();

    assert!(found.is_none());

    Ok(())
}
