//! Shared helpers used across the server layers.

pub mod game;
pub mod html;
pub mod query;
