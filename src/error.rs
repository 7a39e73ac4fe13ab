//! Error types for splitter construction and splitting operations.

use thiserror::Error;

/// Errors surfaced by this crate.
///
/// All failures are configuration failures: either the overlap budget is
/// incompatible with the chunk size, or a token window is configured so that
/// it can never advance. Empty input is never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// `chunk_size` must be at least 1.
    #[error("chunk size must be a positive integer")]
    ZeroChunkSize,

    /// `overlap` may never exceed `chunk_size`.
    #[error("overlap ({overlap}) exceeds chunk size ({chunk_size})")]
    OverlapExceedsChunkSize { chunk_size: usize, overlap: usize },

    /// A token window with `overlap >= chunk_size` never advances its start
    /// position, so the split is rejected up front.
    #[error(
        "token window cannot advance: overlap ({overlap}) must be strictly \
         less than chunk size ({chunk_size})"
    )]
    DegenerateWindow { chunk_size: usize, overlap: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SplitError>;
