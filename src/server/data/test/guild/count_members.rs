use super::*;

/// Tests counting the members of a guild.
///
/// Expected: Ok(3) for the leader and two members, other guilds not counted
#[tokio::test]
async fn counts_members_of_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_guild_with_leader(db).await?;
    for _ in 0..2 {
        let member = factory::create_character(db).await?;
        factory::create_guild_member(db, guild.guildid, member.guid, 4).await?;
    }
    factory::helpers::create_guild_with_leader(db).await?;

    let repo = GuildRepository::new(db, TIMEOUT);
    let count = repo.count_members(guild.guildid).await.unwrap();

    assert_eq!(count, 3);

    Ok(())
}
