use super::*;

async fn create_teams(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::arena_team::ArenaTeamFactory::new(db)
        .name("Bronze")
        .rating(1400)
        .record(20, 8, 0, 0)
        .build()
        .await?;
    factory::arena_team::ArenaTeamFactory::new(db)
        .name("Gold")
        .rating(2300)
        .record(50, 40, 10, 9)
        .build()
        .await?;
    factory::arena_team::ArenaTeamFactory::new(db)
        .name("Trio")
        .team_type(3)
        .rating(2600)
        .build()
        .await?;

    Ok(())
}

/// Tests the 2v2 ladder sorted by rating, descending.
///
/// Expected: Ok with only the 2v2 teams, best rated first
#[tokio::test]
async fn ranks_teams_of_one_size_by_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;
    create_teams(db).await?;

    let request = grid_request(&[
        ("draw", "2"),
        ("order[0][column]", "0"),
        ("order[0][dir]", "desc"),
        ("columns[0][data]", "1"),
        ("columns[0][orderable]", "true"),
    ]);
    let ladder = ArenaService::new(&armory.state)
        .get_ladder(None, Some("2"), &request)
        .await
        .unwrap();

    assert_eq!(ladder.realm, REALM);
    assert_eq!(ladder.team_size, 2);
    assert_eq!(ladder.grid.records_total, 2);
    assert_eq!(
        ladder.grid.data,
        vec![
            vec![json!("Gold"), json!(2300), json!(40), json!(50)],
            vec![json!("Bronze"), json!(1400), json!(8), json!(20)],
        ]
    );

    Ok(())
}

/// Tests the ladder with an explicit realm name in another case.
///
/// Expected: Ok with the configured realm name echoed
#[tokio::test]
async fn resolves_realm_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;
    create_teams(db).await?;

    let ladder = ArenaService::new(&armory.state)
        .get_ladder(Some("icecrown"), Some("3"), &grid_request(&[]))
        .await
        .unwrap();

    assert_eq!(ladder.realm, REALM);
    assert_eq!(ladder.grid.data, vec![vec![json!("Trio"), json!(2600), json!(0), json!(0)]]);

    Ok(())
}

/// Tests the ladder with team sizes other than 2, 3 and 5.
///
/// Expected: Err(AppError::BadRequest) for a missing, non-numeric or unsupported size
#[tokio::test]
async fn rejects_invalid_team_sizes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;
    let service = ArenaService::new(&armory.state);

    for team_size in [None, Some("4"), Some("two")] {
        let result = service.get_ladder(None, team_size, &grid_request(&[])).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests the ladder of a realm that is not configured.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_realm() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let result = ArenaService::new(&armory.state)
        .get_ladder(Some("Lordaeron"), Some("2"), &grid_request(&[]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
