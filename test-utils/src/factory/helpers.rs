//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u32` - Next unique counter value
pub fn next_id() -> u32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild together with its leader.
///
/// This is a convenience method that creates:
/// 1. Character (as guild leader)
/// 2. Guild
/// 3. Guild membership of the leader at rank 0
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, guild))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_leader(
    db: &DatabaseConnection,
) -> Result<(entity::characters::Model, entity::guild::Model), DbErr> {
    let leader = crate::factory::character::create_character(db).await?;
    let guild = crate::factory::guild::GuildFactory::new(db)
        .leader(leader.guid)
        .build()
        .await?;
    crate::factory::guild::create_guild_member(db, guild.guildid, leader.guid, 0).await?;

    Ok((leader, guild))
}

/// Creates an arena team with a captain who is also its first member.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_type` - Team size (2, 3 or 5)
///
/// # Returns
/// - `Ok((captain, team))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_arena_team_with_captain(
    db: &DatabaseConnection,
    team_type: u8,
) -> Result<(entity::characters::Model, entity::arena_team::Model), DbErr> {
    let captain = crate::factory::character::create_character(db).await?;
    let team = crate::factory::arena_team::ArenaTeamFactory::new(db)
        .captain(captain.guid)
        .team_type(team_type)
        .build()
        .await?;
    crate::factory::arena_team::create_arena_team_member(db, team.arena_team_id, captain.guid)
        .await?;

    Ok((captain, team))
}
