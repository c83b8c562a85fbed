//! Account access factory for marking accounts as game masters.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants an account a game master level on a realm.
///
/// # Arguments
/// - `db` - Database connection
/// - `account` - Account id the characters reference
/// - `gmlevel` - Access level; anything above 0 is a game master
/// - `realm_id` - Realm the level applies to, `-1` for every realm
///
/// # Returns
/// - `Ok(entity::account_access::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account_access(
    db: &DatabaseConnection,
    account: u32,
    gmlevel: u8,
    realm_id: i32,
) -> Result<entity::account_access::Model, DbErr> {
    entity::account_access::ActiveModel {
        id: ActiveValue::Set(account),
        gmlevel: ActiveValue::Set(gmlevel),
        realm_id: ActiveValue::Set(realm_id),
    }
    .insert(db)
    .await
}
