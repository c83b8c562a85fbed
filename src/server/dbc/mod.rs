//! Static game reference data.
//!
//! Flat extracts of the client database files are parsed by a streaming CSV reader
//! (`reader`) into `FlatRecord`s, decoded into typed rows (`table`) and served by
//! the `DbcCatalog` through the `Sequence` abstraction. The character customization
//! documents live in their own catalog (`customization`).

pub mod catalog;
pub mod customization;
pub mod reader;
pub mod record;
pub mod sequence;
pub mod table;
