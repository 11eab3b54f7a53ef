//! Rendered output: lines of styled cells.

use crate::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One terminal cell of rendered output.
///
/// A grapheme wider than one column (CJK, most emoji, Devanagari conjuncts)
/// occupies its own cell followed by `width - 1` continuation cells, so a line
/// always has one cell per display column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: String,
    style: Style,
    width: u8,
}

impl Cell {
    /// Create a cell for a grapheme.
    pub fn new(grapheme: &str, style: Style) -> Self {
        Self {
            symbol: grapheme.to_owned(),
            style,
            width: u8::try_from(UnicodeWidthStr::width(grapheme)).unwrap_or(u8::MAX),
        }
    }

    /// A blank (space) cell.
    pub fn blank(style: Style) -> Self {
        Self {
            symbol: " ".to_owned(),
            style,
            width: 1,
        }
    }

    /// The cell following a wide grapheme.
    pub const fn continuation(style: Style) -> Self {
        Self {
            symbol: String::new(),
            style,
            width: 0,
        }
    }

    /// The grapheme shown in this cell (empty for continuations).
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The style of this cell.
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Display width (0 = continuation, 1 = normal, 2 or more = wide).
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Check if this is a wide-character continuation.
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }
}

/// One rendered line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// Create an empty line.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Create a line from cells.
    pub const fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create an unstyled line from plain text.
    pub fn raw(text: &str) -> Self {
        let mut line = Self::new();
        line.push_str(text, Style::default());
        line
    }

    /// Append one cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Append text, one cell per grapheme plus continuations for wide ones.
    pub fn push_str(&mut self, text: &str, style: Style) {
        for grapheme in text.graphemes(true) {
            let cell = Cell::new(grapheme, style);
            let continuations = cell.width().saturating_sub(1);
            self.cells.push(cell);
            for _ in 0..continuations {
                self.cells.push(Cell::continuation(style));
            }
        }
    }

    /// Pad with blank cells up to `width` cells.
    pub fn pad_to(&mut self, width: usize, style: Style) {
        if self.cells.len() < width {
            self.cells.resize(width, Cell::blank(style));
        }
    }

    /// The cells of this line.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells (equals the display width).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Plain text of the line, without styles.
    pub fn text(&self) -> String {
        self.cells.iter().map(Cell::symbol).collect()
    }
}

impl FromIterator<Cell> for Line {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for Line {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgb;

    #[test]
    fn test_raw_line_text() {
        let line = Line::raw("hello");
        assert_eq!(line.len(), 5);
        assert_eq!(line.text(), "hello");
    }

    #[test]
    fn test_wide_grapheme_adds_continuation() {
        let line = Line::raw("日a");
        assert_eq!(line.len(), 3);
        assert_eq!(line.cells()[0].width(), 2);
        assert!(line.cells()[1].is_continuation());
        assert_eq!(line.text(), "日a");
    }

    #[test]
    fn test_extra_wide_grapheme_fills_every_column() {
        // Devanagari conjunct (3 columns) and a run of Hangul jamo (6 columns)
        for (text, width) in [("स्त्र", 3), ("ᄀᄀᄀ", 6)] {
            let line = Line::raw(text);
            assert_eq!(line.len(), width, "{text}");
            assert_eq!(usize::from(line.cells()[0].width()), width);
            assert!(line.cells()[1..].iter().all(Cell::is_continuation));
            assert_eq!(line.text(), text);
        }
    }

    #[test]
    fn test_pad_to() {
        let style = Style::fg(Rgb::WHITE);
        let mut line = Line::raw("ab");
        line.pad_to(5, style);
        assert_eq!(line.text(), "ab   ");
        assert_eq!(line.cells()[4].style(), style);

        // Never truncates
        line.pad_to(1, style);
        assert_eq!(line.len(), 5);
    }
}
