//! Pre-defined test data written to disk.
//!
//! Fixtures create temporary data directories shaped like the armory's `dataDir`: flat
//! reference extracts and character customization documents. The returned `TempDir`
//! removes everything when dropped, so keep it alive for the duration of the test.

pub mod customization;
pub mod dbc;
