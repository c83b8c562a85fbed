use super::*;

/// Tests the existence check by guild id.
///
/// Verifies that only the stored guild id exists even when other guilds are present.
///
/// Expected: true for the stored id, false otherwise
#[tokio::test]
async fn checks_existence_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_guild_with_leader(db).await?;

    let repo = GuildRepository::new(db, TIMEOUT);

    assert!(repo.exists(guild.guildid).await.unwrap());
    assert!(!repo.exists(guild.guildid + 1000).await.unwrap());

    Ok(())
}
