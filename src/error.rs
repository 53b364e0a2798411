use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error opening input file: {path:?}, message: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading records: {0}")]
    Parse(#[from] csv::Error),

    #[error("Error writing output file: {path:?}, message: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error encoding json: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Only raised under [`AlignPolicy::Strict`](crate::document::AlignPolicy::Strict).
    #[error("Row {row} has {found} fields, header has {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}
