//! Error types for the properties store.

use thiserror::Error;

/// Errors raised while reading or writing the backing file.
///
/// These stay internal to the crate: the store operations degrade to the
/// embedded defaults (reads) or log and swallow (writes) instead of
/// propagating them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed \\uXXXX escape on line {line}")]
    InvalidEscape { line: usize },
}
