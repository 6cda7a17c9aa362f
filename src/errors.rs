use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ColumnName;

/// Error type for configuration, table I/O, and transformation failures.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("failed to read table at '{path}': {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to write table at '{path}': {source}")]
    TableWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("table at '{path}' is malformed: {details}")]
    TableShape { path: PathBuf, details: String },
    #[error("column '{column}' {details}")]
    Schema { column: ColumnName, details: String },
    #[error("recipe persistence failure: {0}")]
    Recipe(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
