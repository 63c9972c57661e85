// cusswash-core/src/errors.rs
//! Custom error types for the cusswash-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// All error conditions the library can report.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added
/// in future versions, so they should not match exhaustively.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CusswashError {
    #[error("Word list validation failed:\n{0}")]
    InvalidWordList(String),

    #[error("Failed to parse word list: {0}")]
    WordListParse(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
