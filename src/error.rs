//! Error types.
//!
//! Layout and windowing never fail on well-typed geometry. These errors only
//! report broken preconditions handed in by the code that builds screens.

use thiserror::Error;

/// Precondition violations reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// A viewport size with a negative dimension.
    #[error("viewport dimensions must be non-negative, got {width}x{height}")]
    NegativeDimension {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
    /// A viewport size with a dimension over `u16::MAX` cells.
    #[error("viewport dimensions must be at most 65535 cells, got {width}x{height}")]
    DimensionTooLarge {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
    /// A width lookup for a column the row does not have.
    #[error("row {row} has {columns} columns, column {column} does not exist")]
    ColumnOutOfRange {
        /// Row index.
        row: usize,
        /// Requested column index.
        column: usize,
        /// Number of columns in that row.
        columns: usize,
    },
    /// A lookup for a row the screen does not have.
    #[error("screen has {rows} rows, row {row} does not exist")]
    RowOutOfRange {
        /// Requested row index.
        row: usize,
        /// Number of rows on the screen.
        rows: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScreenError>;
