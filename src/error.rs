//! Error taxonomy for the input boundary

use thiserror::Error;

/// Failures that can occur while ingesting a Matrix Market file.
///
/// Each variant is recoverable at the batch level: a caller processing a
/// directory of matrices logs the failure and moves on to the next file.
/// Structural invalidity of a *built* matrix is not an error — see the
/// boolean verifiers in [`crate::verify`].
#[derive(Debug, Error)]
pub enum MarketError {
    /// The input source could not be read.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The banner declares a matrix kind outside
    /// {real, pattern} x {coordinate} x {general, symmetric}.
    #[error("unsupported Matrix Market format: {0}")]
    UnsupportedFormat(String),

    /// A size or data line could not be parsed, or declared an index out
    /// of range.
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
}
