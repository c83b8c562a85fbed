use super::*;

/// Tests reading team members with their characters.
///
/// Expected: Ok with the captain and the second member
#[tokio::test]
async fn gets_members_with_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (captain, team) = factory::helpers::create_arena_team_with_captain(db, 2).await?;
    let partner = factory::character::CharacterFactory::new(db)
        .name("Partner")
        .race(10)
        .class(8)
        .gender(1)
        .build()
        .await?;
    factory::create_arena_team_member(db, team.arena_team_id, partner.guid).await?;

    let repo = ArenaTeamRepository::new(db, TIMEOUT);
    let members = repo.get_members(team.arena_team_id).await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].character.guid, captain.guid);
    assert_eq!(members[1].character.name, "Partner");
    assert_eq!(members[1].member.personal_rating, 1500);

    Ok(())
}
