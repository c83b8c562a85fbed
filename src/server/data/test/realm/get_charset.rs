use super::*;

/// Tests the character set of a non-MySQL database.
///
/// SQLite has no `@@character_set_database`, so no collation applies.
///
/// Expected: Ok(None)
#[tokio::test]
async fn sqlite_has_no_charset() {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RealmRepository::new(db, TIMEOUT);
    let charset = repo.get_charset().await.unwrap();

    assert!(charset.is_none());
}
