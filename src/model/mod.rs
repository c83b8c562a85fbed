//! Data transfer objects returned by the HTTP API.
//!
//! Page endpoints return these view models as JSON; rendering them is left to the
//! front end. Field names are camelCase on the wire.

pub mod api;
pub mod arena;
pub mod character;
pub mod emblem;
pub mod grid;
pub mod guild;
pub mod index;
pub mod search;
