use super::*;

/// Tests finding an arena team by name.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for another
#[tokio::test]
async fn finds_team_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (captain, _) = factory::helpers::create_arena_team_with_captain(db, 3).await?;
    let team = factory::arena_team::ArenaTeamFactory::new(db)
        .name("Gladiators")
        .captain(captain.guid)
        .rating(2200)
        .build()
        .await?;

    let repo = ArenaTeamRepository::new(db, TIMEOUT);
    let found = repo.find_by_name("Gladiators").await.unwrap().unwrap();
    assert_eq!(found.arena_team_id, team.arena_team_id);
    assert_eq!(found.rating, 2200);

    assert!(repo.find_by_name("Nobody").await.unwrap().is_none());

    Ok(())
}
