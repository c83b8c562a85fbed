//! Service layer assembling the armory's view models.
//!
//! Services sit between the controllers and the data layer. They resolve realm-specific
//! settings (query timeout, game master hiding, charset collation), run the repository
//! queries and data grids, and enrich the rows with the reference data lookups built at
//! startup.

pub mod arena;
pub mod character;
pub mod grid;
pub mod guild;
pub mod index;
pub mod search;

#[cfg(test)]
pub(crate) mod test;
