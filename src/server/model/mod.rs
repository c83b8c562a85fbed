//! Server-side domain models.
//!
//! Rows read by the data layer and the enriched models the service layer builds from
//! them. Models are converted to DTOs at the controller boundary.

pub mod arena;
pub mod character;
pub mod emblem;
pub mod guild;
pub mod realm;
