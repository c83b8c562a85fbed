//! Realm-scoped query settings.

/// Identifies the game master accounts to hide on one realm.
///
/// Accounts with a `gmlevel > 0` row in `<auth_database>.account_access` whose `RealmID`
/// is `-1` or `realm_id` are game masters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMasterFilter {
    pub auth_database: String,
    pub realm_id: i32,
}

impl GameMasterFilter {
    /// Join condition of `account_access` against `characters.account`, excluding
    /// non game master rows so the left join yields NULL for regular players.
    pub fn join_on(&self) -> String {
        format!(
            "`account_access`.`RealmID` IN (-1, {}) AND `account_access`.`gmlevel` > 0",
            self.realm_id
        )
    }
}
