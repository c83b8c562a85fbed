use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading reference data extracts.
///
/// A read never recovers partially: any of these errors aborts the whole table read.
#[derive(Error, Debug)]
pub enum DbcError {
    /// A reference data file expected by the catalog does not exist.
    #[error("Reference data file {} is missing", .path.display())]
    Missing { path: PathBuf },

    /// I/O failure while opening or reading an extract.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extract is not readable as CSV: a read failure or a cell that is not UTF-8.
    #[error("Failed to parse reference data: {0}")]
    Csv(#[from] csv_async::Error),

    /// A record could not be converted into the typed row of its table.
    #[error("Failed to decode {table} row: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A customization document is not valid JSON.
    #[error("Failed to parse customization data {}: {source}", .path.display())]
    Customization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
