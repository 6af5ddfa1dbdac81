//! Error types for loading and querying a roster file

use std::path::PathBuf;

use thiserror::Error;

/// Roster errors
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read failure from a reader with no associated path.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    #[error("line {line}: expected {expected} fields separated by '|', found {found}")]
    MalformedLine {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("invalid record: {0}")]
    Csv(#[from] csv::Error),

    #[error("person not found: {0}")]
    PersonNotFound(String),
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
