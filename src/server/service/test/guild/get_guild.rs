use super::*;

/// Tests the guild page of a Horde guild with two members.
///
/// Expected: Ok with the leader's name, Horde faction and a member count of 2
#[tokio::test]
async fn builds_guild_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let leader = factory::character::CharacterFactory::new(db)
        .name("Thrall")
        .race(2)
        .build()
        .await?;
    let guild = factory::guild::GuildFactory::new(db)
        .name("Horde Vanguard")
        .leader(leader.guid)
        .emblem(3, 5, 1, 2, 7)
        .build()
        .await?;
    let member = factory::create_character(db).await?;
    factory::create_guild_member(db, guild.guildid, leader.guid, 0).await?;
    factory::create_guild_member(db, guild.guildid, member.guid, 4).await?;

    let service = GuildService::new(&armory.state, armory.realm());
    let page = service.get_guild("Horde Vanguard").await.unwrap();

    assert_eq!(page.title, "Armory - Horde Vanguard");
    assert_eq!(page.id, guild.guildid);
    assert_eq!(page.leader, "Thrall");
    assert_eq!(page.faction, 0);
    assert_eq!(page.members_count, 2);

    Ok(())
}

/// Tests the guild page of an unknown guild.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_guild_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let service = GuildService::new(&armory.state, armory.realm());
    let result = service.get_guild("Nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
