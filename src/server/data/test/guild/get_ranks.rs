use super::*;

/// Tests reading rank names ordered by rank id.
///
/// Expected: Ok with ranks in ascending id order
#[tokio::test]
async fn gets_ranks_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, guild) = factory::helpers::create_guild_with_leader(db).await?;
    factory::create_guild_rank(db, guild.guildid, 1, "Officer").await?;
    factory::create_guild_rank(db, guild.guildid, 0, "Guild Master").await?;

    let repo = GuildRepository::new(db, TIMEOUT);
    let ranks = repo.get_ranks(guild.guildid).await.unwrap();

    let names: Vec<_> = ranks.iter().map(|rank| rank.rname.as_str()).collect();
    assert_eq!(names, vec!["Guild Master", "Officer"]);

    Ok(())
}
