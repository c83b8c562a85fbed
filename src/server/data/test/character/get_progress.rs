use super::*;

/// Tests reading talents, glyphs and achievements of one character.
///
/// Verifies that rows of other characters are not returned and that glyph rows
/// come back ordered by talent group.
///
/// Expected: Ok with the character's own rows
#[tokio::test]
async fn gets_talents_glyphs_and_achievements() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let other = factory::create_character(db).await?;

    factory::progress::create_character_talent(db, character.guid, 12294, 3).await?;
    factory::progress::create_character_talent(db, character.guid, 12296, 2).await?;
    factory::progress::create_character_talent(db, other.guid, 12294, 1).await?;

    factory::progress::create_character_glyphs(db, character.guid, 1, [0, 0, 0, 0, 0, 0]).await?;
    factory::progress::create_character_glyphs(db, character.guid, 0, [251, 0, 0, 0, 0, 0]).await?;

    factory::progress::create_character_achievement(db, character.guid, 6, 1_600_000_000).await?;
    factory::progress::create_character_achievement(db, other.guid, 963, 1_600_000_001).await?;

    let repo = CharacterRepository::new(db, TIMEOUT);

    let talents = repo.get_talents(character.guid).await.unwrap();
    assert_eq!(talents.len(), 2);
    assert!(talents.iter().all(|talent| talent.guid == character.guid));

    let glyphs = repo.get_glyphs(character.guid).await.unwrap();
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].talent_group, 0);
    assert_eq!(glyphs[0].glyph1, 251);
    assert_eq!(glyphs[1].talent_group, 1);

    let achievements = repo.get_achievements(character.guid).await.unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0].achievement, 6);
    assert_eq!(achievements[0].date, 1_600_000_000);

    Ok(())
}
