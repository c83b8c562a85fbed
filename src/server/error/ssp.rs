use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, query::QueryError, InternalServerError};

/// Errors raised while parsing or running a data grid request.
#[derive(Error, Debug)]
pub enum SspError {
    /// A query string parameter is present but malformed.
    #[error("Invalid value {value:?} for grid parameter {name}")]
    InvalidParameter { name: String, value: String },

    /// A request column points at a column the grid does not define.
    #[error("Grid column {index} does not exist ({available} columns defined)")]
    ColumnOutOfRange { index: usize, available: usize },

    /// A sort request references a request column that was not sent.
    #[error("Sort references unknown request column {0}")]
    UnknownOrderColumn(usize),

    /// One of the three grid queries failed or timed out.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl From<sea_orm::DbErr> for SspError {
    fn from(err: sea_orm::DbErr) -> Self {
        SspError::Query(QueryError::Db(err))
    }
}

/// Converts grid errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed grid parameters
/// - 500 Internal Server Error - For query failures and timeouts
impl IntoResponse for SspError {
    fn into_response(self) -> Response {
        match self {
            Self::Query(err) => InternalServerError(err).into_response(),
            err => {
                tracing::debug!("Rejected grid request: {}", err);
                error_response(StatusCode::BAD_REQUEST)
            }
        }
    }
}
