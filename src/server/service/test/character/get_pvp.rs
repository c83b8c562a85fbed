use super::*;

/// Tests the PvP page of an Alliance character in two arena teams.
///
/// Expected: Ok with faction, kill counters and teams ordered by size
#[tokio::test]
async fn builds_pvp_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let character = factory::character::CharacterFactory::new(db)
        .name("Anduin")
        .race(1)
        .kills(1200, 4, 9)
        .build()
        .await?;
    let five = factory::arena_team::ArenaTeamFactory::new(db)
        .name("Lions")
        .captain(character.guid)
        .team_type(5)
        .build()
        .await?;
    let two = factory::arena_team::ArenaTeamFactory::new(db)
        .name("Cubs")
        .captain(character.guid)
        .team_type(2)
        .rating(1850)
        .build()
        .await?;
    factory::create_arena_team_member(db, five.arena_team_id, character.guid).await?;
    factory::create_arena_team_member(db, two.arena_team_id, character.guid).await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_pvp("Anduin").await.unwrap();

    assert_eq!(page.sheet.title, "Armory - Anduin - PvP");
    assert_eq!(page.faction, 1);
    assert_eq!(page.kills.total, 1200);
    assert_eq!(page.kills.today, 4);
    assert_eq!(page.kills.yesterday, 9);

    let teams: Vec<(&str, u8)> = page
        .arena_teams
        .iter()
        .map(|team| (team.name.as_str(), team.team_type))
        .collect();
    assert_eq!(teams, vec![("Cubs", 2), ("Lions", 5)]);
    assert_eq!(page.arena_teams[0].rating, 1850);

    Ok(())
}
