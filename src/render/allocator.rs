//! Column-width allocator.
//!
//! Allocation is two passes over the rows:
//!
//! 1. [`classify_columns`] decides per column index whether the column gets a
//!    fixed width (its widest content plus padding) or is flexible.
//! 2. [`resolve_widths`] walks every row and turns the classification into
//!    concrete widths. Flexible columns split the space left over by fixed
//!    columns equally, and the last column of each row takes whatever is left
//!    so that every row sums to exactly the viewport width.
//!
//! ```text
//!  width = 20, ideal = 20 / 2 = 10
//!  ┌──────────┬─────────────────────┐
//!  │ "foo"    │ "hello"             │
//!  │ Fixed(4) │ residual: 20-4 = 16 │
//!  └──────────┴─────────────────────┘
//! ```

use crate::error::{Result, ScreenError};
use crate::model::{Layout, Row};

/// Width classification of one column index across all rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColumnWidth {
    /// Widest content at this index plus padding.
    Fixed(u16),
    /// Shares the space left after fixed columns with the other flexible columns.
    Flexible,
}

impl ColumnWidth {
    /// Check if this column is flexible.
    #[inline]
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flexible)
    }
}

/// Resolved widths for every column of every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    classes: Vec<ColumnWidth>,
    rows: Vec<Vec<u16>>,
}

impl ColumnWidths {
    /// Per-index classification that produced these widths.
    pub fn classes(&self) -> &[ColumnWidth] {
        &self.classes
    }

    /// Widths of one row's columns, left to right.
    pub fn row(&self, row: usize) -> Option<&[u16]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Width of a single column.
    ///
    /// # Errors
    /// Returns [`ScreenError::RowOutOfRange`] or [`ScreenError::ColumnOutOfRange`]
    /// when the row or column does not exist.
    pub fn width(&self, row: usize, column: usize) -> Result<u16> {
        let widths = self.row(row).ok_or(ScreenError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        widths
            .get(column)
            .copied()
            .ok_or(ScreenError::ColumnOutOfRange {
                row,
                column,
                columns: widths.len(),
            })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the widths of every row.
    pub fn iter(&self) -> impl Iterator<Item = &[u16]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Maximum column count among all rows.
pub fn count_columns(rows: &[Row]) -> usize {
    rows.iter().map(Row::len).max().unwrap_or(0)
}

/// Classify every column index as fixed or flexible.
///
/// A column index is flexible as soon as one row's content there does not fit
/// in the ideal equal share (`width / total_columns`) minus `padding`. Rows
/// that do not reach the index are skipped.
#[allow(clippy::cast_possible_truncation)]
pub fn classify_columns(rows: &[Row], width: u16, padding: u16) -> Vec<ColumnWidth> {
    let total_columns = count_columns(rows);
    if total_columns == 0 {
        return Vec::new();
    }

    let ideal_width = usize::from(width) / total_columns;
    let padding = usize::from(padding);

    (0..total_columns)
        .map(|index| {
            let mut fixed = 0usize;
            for column in rows.iter().filter_map(|row| row.column(index)) {
                let needed = column.content_length() + padding;
                if needed > ideal_width {
                    return ColumnWidth::Flexible;
                }
                fixed = fixed.max(needed);
            }
            // fixed <= ideal_width <= width
            ColumnWidth::Fixed(fixed as u16)
        })
        .collect()
}

/// Turn a classification into concrete widths for every row.
///
/// Flexible columns all get `(width - fixed_total) / flexible_count`. The last
/// column of each row gets the residual, whatever its classification.
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_widths(rows: &[Row], classes: &[ColumnWidth], width: u16) -> ColumnWidths {
    let dynamic_count = classes.iter().filter(|c| c.is_flexible()).count();
    let fixed_total: u32 = classes
        .iter()
        .map(|c| match c {
            ColumnWidth::Fixed(w) => u32::from(*w),
            ColumnWidth::Flexible => 0,
        })
        .sum();

    let flexible_width = if dynamic_count == 0 {
        0
    } else {
        // result <= width
        (u32::from(width).saturating_sub(fixed_total) / dynamic_count as u32) as u16
    };

    let widths: Vec<Vec<u16>> = rows
        .iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            let mut total_width: u16 = 0;
            (0..row.len())
                .map(|index| {
                    let column_width = if index == last {
                        width.saturating_sub(total_width)
                    } else {
                        match classes.get(index) {
                            Some(ColumnWidth::Fixed(w)) => *w,
                            Some(ColumnWidth::Flexible) | None => flexible_width,
                        }
                    };
                    total_width = total_width.saturating_add(column_width);
                    column_width
                })
                .collect()
        })
        .collect();

    ColumnWidths {
        classes: classes.to_vec(),
        rows: widths,
    }
}

/// Classify and resolve column widths for a set of rows.
pub fn allocate(rows: &[Row], layout: Layout, padding: u16) -> ColumnWidths {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "allocate_columns",
        rows = rows.len(),
        width = layout.width
    )
    .entered();

    let classes = classify_columns(rows, layout.width, padding);
    let widths = resolve_widths(rows, &classes, layout.width);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        columns = classes.len(),
        flexible = classes.iter().filter(|c| c.is_flexible()).count(),
        "column widths resolved"
    );

    widths
}
