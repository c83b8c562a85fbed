//! HTTP request handlers.
//!
//! Handlers resolve the realm, hand the request to a service and wrap the returned view
//! model in JSON. Every handler carries a `utoipa::path` annotation; the router collects
//! them into the OpenAPI document served at `/api/docs`.

pub mod arena;
pub mod character;
pub mod guild;
pub mod index;
pub mod search;

use url::form_urlencoded;

use crate::server::{
    error::AppError,
    ssp::request::SspRequest,
    state::{AppState, Realm},
};

/// Resolves the realm segment of a page route.
///
/// # Arguments
/// - `state` - Application state holding the realm registry
/// - `name` - Realm name from the path, matched case-insensitively
///
/// # Returns
/// - `Ok(&Realm)` - Configured realm
/// - `Err(AppError::NotFound)` - No realm with that name
pub fn find_realm<'a>(state: &'a AppState, name: &str) -> Result<&'a Realm, AppError> {
    state
        .realms
        .get(name)
        .ok_or_else(|| AppError::NotFound(format!("Realm {} not found", name)))
}

/// Decoded query string of a grid endpoint.
///
/// Grid parameters use bracketed keys that the typed `Query` extractor cannot express, so
/// the raw query is decoded into pairs once and read both as an `SspRequest` and for the
/// endpoint's own parameters.
pub struct GridQuery {
    pairs: Vec<(String, String)>,
}

impl GridQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|query| form_urlencoded::parse(query.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self { pairs }
    }

    /// First value of a non-grid parameter; empty values count as absent.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn request(&self) -> Result<SspRequest, AppError> {
        let pairs = self
            .pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()));

        Ok(SspRequest::from_pairs(pairs)?)
    }
}
