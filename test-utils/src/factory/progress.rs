//! Factories for character progress rows: learned spells, talents, glyphs and achievements.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a learned spell.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Character guid
/// - `spell` - Spell id
///
/// # Returns
/// - `Ok(entity::character_spell::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character_spell(
    db: &DatabaseConnection,
    guid: u32,
    spell: u32,
) -> Result<entity::character_spell::Model, DbErr> {
    entity::character_spell::ActiveModel {
        guid: ActiveValue::Set(guid),
        spell: ActiveValue::Set(spell),
    }
    .insert(db)
    .await
}

/// Records a learned talent rank.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Character guid
/// - `spell` - Spell id of the learned talent rank
/// - `spec_mask` - Bit 1 for the primary spec, bit 2 for the secondary spec
///
/// # Returns
/// - `Ok(entity::character_talent::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character_talent(
    db: &DatabaseConnection,
    guid: u32,
    spell: u32,
    spec_mask: u8,
) -> Result<entity::character_talent::Model, DbErr> {
    entity::character_talent::ActiveModel {
        guid: ActiveValue::Set(guid),
        spell: ActiveValue::Set(spell),
        spec_mask: ActiveValue::Set(spec_mask),
    }
    .insert(db)
    .await
}

/// Records the glyphs of one talent group; 0 marks an empty socket.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Character guid
/// - `talent_group` - 0 for the primary spec, 1 for the secondary spec
/// - `glyphs` - Glyph property ids of the six sockets
///
/// # Returns
/// - `Ok(entity::character_glyphs::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character_glyphs(
    db: &DatabaseConnection,
    guid: u32,
    talent_group: u8,
    glyphs: [u16; 6],
) -> Result<entity::character_glyphs::Model, DbErr> {
    entity::character_glyphs::ActiveModel {
        guid: ActiveValue::Set(guid),
        talent_group: ActiveValue::Set(talent_group),
        glyph1: ActiveValue::Set(glyphs[0]),
        glyph2: ActiveValue::Set(glyphs[1]),
        glyph3: ActiveValue::Set(glyphs[2]),
        glyph4: ActiveValue::Set(glyphs[3]),
        glyph5: ActiveValue::Set(glyphs[4]),
        glyph6: ActiveValue::Set(glyphs[5]),
    }
    .insert(db)
    .await
}

/// Records an earned achievement.
///
/// # Arguments
/// - `db` - Database connection
/// - `guid` - Character guid
/// - `achievement` - Achievement id
/// - `date` - Unix timestamp the achievement was earned at
///
/// # Returns
/// - `Ok(entity::character_achievement::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character_achievement(
    db: &DatabaseConnection,
    guid: u32,
    achievement: u16,
    date: u32,
) -> Result<entity::character_achievement::Model, DbErr> {
    entity::character_achievement::ActiveModel {
        guid: ActiveValue::Set(guid),
        achievement: ActiveValue::Set(achievement),
        date: ActiveValue::Set(date),
    }
    .insert(db)
    .await
}
