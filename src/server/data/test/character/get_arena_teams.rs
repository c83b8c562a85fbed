use super::*;

/// Tests listing a character's arena teams.
///
/// Verifies that teams are ordered by team size regardless of insertion order and
/// that teams the character does not belong to are excluded.
///
/// Expected: Ok with the 2v2 team before the 5v5 team
#[tokio::test]
async fn lists_teams_by_team_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let five = factory::arena_team::ArenaTeamFactory::new(db)
        .captain(character.guid)
        .team_type(5)
        .build()
        .await?;
    let two = factory::arena_team::ArenaTeamFactory::new(db)
        .captain(character.guid)
        .team_type(2)
        .build()
        .await?;
    factory::create_arena_team_member(db, five.arena_team_id, character.guid).await?;
    factory::create_arena_team_member(db, two.arena_team_id, character.guid).await?;

    // A team the character is not on
    factory::helpers::create_arena_team_with_captain(db, 3).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let teams = repo.get_arena_teams(character.guid).await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].arena_team_id, two.arena_team_id);
    assert_eq!(teams[1].arena_team_id, five.arena_team_id);

    Ok(())
}
