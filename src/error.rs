//! Error types shared by the sequence, grid and LCS modules.
//!
//! Every error here describes a broken caller contract (bad index, write to a
//! read-only grid). The checked accessors return them as values; the plain
//! accessors panic with their `Display` text.

use thiserror::Error;

/// Errors raised by sequence and grid access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A sequence was indexed at or past its length.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A grid cell outside `rows x columns` was addressed.
    #[error("cell ({row}, {column}) out of bounds for {rows}x{columns} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// The operation is not supported by this implementation (e.g. writing to
    /// a read-only grid).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type for sequence and grid operations
pub type Result<T> = std::result::Result<T, Error>;
