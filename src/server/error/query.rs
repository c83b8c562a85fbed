use std::time::Duration;

use thiserror::Error;

/// Failure of a relational query issued under a timeout.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The store rejected the query or the connection failed.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    /// The query did not complete in time. It is not retried.
    #[error("Query exceeded timeout of {0:?}")]
    Timeout(Duration),
}
