use super::*;

/// Tests the team page of a 3v3 team with two members.
///
/// Expected: Ok with the team record and members in guid order
#[tokio::test]
async fn builds_team_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let captain = factory::character::CharacterFactory::new(db)
        .name("Rexxar")
        .race(2)
        .class(3)
        .online(true)
        .build()
        .await?;
    let partner = factory::character::CharacterFactory::new(db)
        .name("Misha")
        .race(10)
        .class(8)
        .gender(1)
        .build()
        .await?;
    let team = factory::arena_team::ArenaTeamFactory::new(db)
        .name("Beastmasters")
        .captain(captain.guid)
        .team_type(3)
        .rating(1980)
        .record(30, 21, 5, 4)
        .build()
        .await?;
    factory::create_arena_team_member(db, team.arena_team_id, captain.guid).await?;
    factory::create_arena_team_member(db, team.arena_team_id, partner.guid).await?;

    let page = ArenaService::new(&armory.state)
        .get_team(armory.realm(), "Beastmasters")
        .await
        .unwrap();

    assert_eq!(page.title, "Armory - Beastmasters");
    assert_eq!(page.realm, REALM);
    assert_eq!(page.captain_guid, captain.guid);
    assert_eq!(page.team_type, 3);
    assert_eq!(page.rating, 1980);
    assert_eq!((page.season_games, page.season_wins), (30, 21));

    let members: Vec<(&str, Option<&str>, &str, bool)> = page
        .members
        .iter()
        .map(|member| {
            (
                member.name.as_str(),
                member.class.as_deref(),
                member.gender.as_str(),
                member.online,
            )
        })
        .collect();
    assert_eq!(
        members,
        vec![
            ("Rexxar", Some("hunter"), "male", true),
            ("Misha", Some("mage"), "female", false),
        ]
    );

    Ok(())
}

/// Tests the team page of an unknown team.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_team_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let result = ArenaService::new(&armory.state)
        .get_team(armory.realm(), "Nobody")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
