//! Rows and columns of a screen.

use super::span::Span;

/// A positional slot within a row holding spans.
///
/// Columns are aligned across rows by index only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    spans: Vec<Span>,
}

impl Column {
    /// Create a column from spans.
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// Create a column holding a single primary span.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::new(content)],
        }
    }

    /// Append a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The spans of this column.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Sum of the display widths of all spans.
    pub fn content_length(&self) -> usize {
        self.spans.iter().map(Span::content_length).sum()
    }
}

/// An ordered sequence of columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    columns: Vec<Column>,
}

impl Row {
    /// Create a row from columns.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Append a column.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// The columns of this row.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by index.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for Row {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_content_length_sums_spans() {
        let column = Column::new([Span::new("foo"), Span::new(" "), Span::new("bar")]);
        assert_eq!(column.content_length(), 7);
    }

    #[test]
    fn test_empty_column_has_zero_length() {
        assert_eq!(Column::default().content_length(), 0);
    }

    #[test]
    fn test_row_columns() {
        let row: Row = ["a", "bb"].into_iter().map(Column::text).collect();
        assert_eq!(row.len(), 2);
        assert_eq!(row.column(1).map(Column::content_length), Some(2));
        assert!(row.column(2).is_none());
        assert!(Row::default().is_empty());
    }
}
