//! Data access layer.
//!
//! Repositories borrow a realm or world connection together with the configured query
//! timeout. Single-table reads use SeaORM entity queries, multi-table reads with aliased
//! columns use raw parameterized SQL. Every query runs under the timeout and fails with
//! `QueryError::Timeout` once it expires.

pub mod arena_team;
pub mod character;
pub mod guild;
pub mod realm;
pub mod world;

#[cfg(test)]
mod test;
