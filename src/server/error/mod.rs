//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps subsystem errors and implements `IntoResponse`. Every failure
//! funnels through `ErrorDto::from_status` so clients only ever see a generic
//! name/description pair for the status code.

pub mod config;
pub mod dbc;
pub mod query;
pub mod ssp;

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, dbc::DbcError, query::QueryError, ssp::SspError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Subsystem errors convert with `#[from]`;
/// `NotFound` and `BadRequest` carry a message that is logged but never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Reference data could not be read or a required extract is missing.
    ///
    /// Treated as a deployment error: 500 Internal Server Error.
    #[error(transparent)]
    DbcErr(#[from] DbcError),

    /// Invalid data grid request or failed grid query.
    ///
    /// Delegates to `SspError::into_response()` for status mapping.
    #[error(transparent)]
    SspErr(#[from] SspError),

    /// A relational query did not complete within the configured timeout.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Query exceeded timeout of {0:?}")]
    QueryTimeout(Duration),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Db(err) => AppError::DbErr(err),
            QueryError::Timeout(timeout) => AppError::QueryTimeout(timeout),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and invalid grid parameters
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::SspErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                error_response(StatusCode::NOT_FOUND)
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                error_response(StatusCode::BAD_REQUEST)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error response for a status code.
///
/// # Arguments
/// - `status` - HTTP status of the response
///
/// # Returns
/// - `Response` - Status with the generic `ErrorDto` body
pub fn error_response(status: StatusCode) -> Response {
    (status, Json(ErrorDto::from_status(status.as_u16()))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the full error inside the current request span, which carries the request id,
/// and returns the generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
