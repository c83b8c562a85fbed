use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request.
///
/// Only the generic name and description of the status code are exposed; the
/// underlying error is logged server-side together with the request id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub status: u16,
    pub name: String,
    pub description: String,
}

impl ErrorDto {
    /// Builds the error body for a numeric HTTP status code.
    ///
    /// Known codes map to a fixed name/description pair, anything else falls back to
    /// "An error occurred" with an empty description.
    ///
    /// # Arguments
    /// - `status` - HTTP status code of the response
    ///
    /// # Returns
    /// - `ErrorDto` - Generic body describing the status
    pub fn from_status(status: u16) -> Self {
        let name = match status {
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "An error occurred",
        };
        let description = match status {
            400 => "Invalid request.",
            404 => "Sorry, we could not find what you were looking for.",
            500 => "An unexpected internal error has occurred. Please contact the site owner.",
            _ => "",
        };

        Self {
            status,
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}
