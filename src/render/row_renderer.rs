//! Row rendering: turns one row and its resolved widths into output lines.
//!
//! The renderer is a seam. [`crate::ScreenRenderer`] only needs something that
//! implements [`RowRenderer`]; [`PlainRowRenderer`] is the default, and any
//! closure with the right signature works too.

use super::line::Line;
use crate::model::{Column, Layout, Row};
use crate::style::ColorScheme;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Renders a row into its lines once column widths are known.
pub trait RowRenderer {
    /// Render `row` given the widths of its columns (same order, same count).
    ///
    /// Implementations should return at most `layout.height` lines.
    fn render_row(
        &self,
        row: &Row,
        widths: &[u16],
        layout: Layout,
        scheme: &ColorScheme,
    ) -> Vec<Line>;
}

impl<F> RowRenderer for F
where
    F: Fn(&Row, &[u16], Layout, &ColorScheme) -> Vec<Line>,
{
    fn render_row(
        &self,
        row: &Row,
        widths: &[u16],
        layout: Layout,
        scheme: &ColorScheme,
    ) -> Vec<Line> {
        self(row, widths, layout, scheme)
    }
}

/// Default row renderer: lays spans out left to right inside each column.
///
/// Content wider than its column either wraps onto more lines or is cut off.
/// The row is as tall as its tallest column, capped at the viewport height,
/// and every line is padded to the full row width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlainRowRenderer {
    wrap: bool,
}

impl Default for PlainRowRenderer {
    fn default() -> Self {
        Self { wrap: true }
    }
}

impl PlainRowRenderer {
    /// A renderer that wraps overflowing content.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that cuts overflowing content at the column edge.
    pub const fn truncating() -> Self {
        Self { wrap: false }
    }

    /// Lay out one column's spans into lines no wider than `width`.
    fn render_column(&self, column: &Column, width: usize, scheme: &ColorScheme) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut current = Line::new();

        'spans: for span in column.spans() {
            let style = scheme
                .style_for(span.role())
                .with_modifiers(span.modifiers());
            for grapheme in span.content().graphemes(true) {
                if grapheme == "\n" || grapheme == "\r\n" {
                    if !self.wrap {
                        break 'spans;
                    }
                    lines.push(std::mem::take(&mut current));
                    continue;
                }
                let grapheme_width = UnicodeWidthStr::width(grapheme);
                if grapheme_width == 0 || grapheme_width > width {
                    continue;
                }
                if current.len() + grapheme_width > width {
                    if !self.wrap {
                        break 'spans;
                    }
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(grapheme, style);
            }
        }
        lines.push(current);
        lines
    }
}

impl RowRenderer for PlainRowRenderer {
    fn render_row(
        &self,
        row: &Row,
        widths: &[u16],
        layout: Layout,
        scheme: &ColorScheme,
    ) -> Vec<Line> {
        let columns: Vec<(Vec<Line>, usize)> = row
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let width = usize::from(widths.get(index).copied().unwrap_or(0));
                (self.render_column(column, width, scheme), width)
            })
            .collect();

        let tallest = columns.iter().map(|(lines, _)| lines.len()).max().unwrap_or(1);
        let height = tallest.min(usize::from(layout.height));

        (0..height)
            .map(|line_index| {
                let mut line = Line::new();
                let mut offset = 0;
                for (lines, width) in &columns {
                    if let Some(part) = lines.get(line_index) {
                        line.extend(part.cells().iter().cloned());
                    }
                    offset += width;
                    line.pad_to(offset, scheme.background);
                }
                line
            })
            .collect()
    }
}
