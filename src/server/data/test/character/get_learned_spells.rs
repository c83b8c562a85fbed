use super::*;

/// Tests intersecting learned spells with a candidate list.
///
/// Expected: Ok with only the learned candidates
#[tokio::test]
async fn returns_learned_candidates_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    factory::progress::create_character_spell(db, character.guid, 48778).await?;
    factory::progress::create_character_spell(db, character.guid, 133).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let spells = repo
        .get_learned_spells(character.guid, &[48778, 32240])
        .await
        .unwrap();

    assert_eq!(spells, vec![48778]);

    Ok(())
}

/// Tests that an empty candidate list matches nothing without querying.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_candidates_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    factory::progress::create_character_spell(db, character.guid, 48778).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);
    let spells = repo.get_learned_spells(character.guid, &[]).await.unwrap();

    assert!(spells.is_empty());

    Ok(())
}
