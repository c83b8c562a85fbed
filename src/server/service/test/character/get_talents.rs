use test_utils::fixture::dbc::{SPELL_GLYPH, SPELL_TALENT};

use super::*;

/// Tests the talents page of a warrior with a dual spec.
///
/// Expected: Ok with talents split by spec, both warrior trees and primary glyphs
#[tokio::test]
async fn builds_talents_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let character = factory::create_character_named(db, "Garrosh").await?;
    factory::progress::create_character_talent(db, character.guid, SPELL_TALENT, 1).await?;
    factory::progress::create_character_talent(db, character.guid, 12296, 3).await?;
    factory::progress::create_character_glyphs(db, character.guid, 0, [251, 0, 0, 0, 0, 0])
        .await?;
    factory::progress::create_character_glyphs(db, character.guid, 1, [0; 6]).await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_talents("Garrosh").await.unwrap();

    assert_eq!(page.sheet.title, "Armory - Garrosh - Talents");

    let mut primary = page.data.talents[0].clone();
    primary.sort();
    assert_eq!(primary, vec![SPELL_TALENT, 12296]);
    assert_eq!(page.data.talents[1], vec![12296]);

    let trees: Vec<&str> = page.data.trees.iter().map(|tree| tree.name.as_str()).collect();
    assert_eq!(trees, vec!["Arms", "Fury"]);
    assert_eq!(page.data.glyphs, [vec![SPELL_GLYPH as i64], vec![]]);

    Ok(())
}

/// Tests the talents page of a character that never spent a point.
///
/// Expected: Ok with empty specs and glyphs but the class's trees
#[tokio::test]
async fn character_without_talents_has_empty_specs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    factory::character::CharacterFactory::new(db)
        .name("Malfurion")
        .race(4)
        .class(11)
        .build()
        .await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_talents("Malfurion").await.unwrap();

    assert!(page.data.talents.iter().all(Vec::is_empty));
    assert!(page.data.glyphs.iter().all(Vec::is_empty));
    assert_eq!(page.data.trees.len(), 1);
    assert_eq!(page.data.trees[0].name, "Balance");

    Ok(())
}
