//! Screen renderer: one full render pass over a [`Screen`].
//!
//! A pass runs in a fixed order:
//!
//! 1. Skip if the screen is clean.
//! 2. Allocate column widths ([`allocate`]).
//! 3. Render every row with the [`RowRenderer`] now that widths are known.
//! 4. Window the rendered lines ([`compute_window_with`]).
//! 5. Store the [`Frame`] in the screen and mark it clean.

use super::allocator::{allocate, ColumnWidths};
use super::line::Line;
use super::row_renderer::{PlainRowRenderer, RowRenderer};
use super::window::{compute_window_with, AfterSelection};
use crate::model::{Layout, Row, Screen, WindowRequest};
use crate::style::ColorScheme;

/// Configuration for the screen renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Colors handed to the row renderer.
    pub color_scheme: ColorScheme,
    /// Gap added after fixed-width columns, also the headroom a column
    /// needs within its equal share to stay fixed.
    pub column_padding: u16,
    /// Whether rows after the selected one may fill leftover space.
    pub after_selection: AfterSelection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            column_padding: 1,
            after_selection: AfterSelection::Stop,
        }
    }
}

impl RenderConfig {
    /// Set the color scheme (builder pattern).
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Set the column padding (builder pattern).
    #[must_use]
    pub const fn with_column_padding(mut self, column_padding: u16) -> Self {
        self.column_padding = column_padding;
        self
    }

    /// Set the policy for rows after the selection (builder pattern).
    #[must_use]
    pub const fn with_after_selection(mut self, after_selection: AfterSelection) -> Self {
        self.after_selection = after_selection;
        self
    }
}

/// Output of a render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    widths: ColumnWidths,
    total_lines: usize,
    window: Vec<Line>,
}

impl Frame {
    /// Column widths of every row.
    pub const fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Number of rendered lines across all rows, before windowing.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// The visible lines, top to bottom.
    pub fn window(&self) -> &[Line] {
        &self.window
    }
}

/// Runs render passes over screens.
///
/// # Example
///
/// ```
/// use rowview::{Column, Layout, Row, Screen, ScreenRenderer};
///
/// let mut screen = Screen::new(Layout::new(20, 5)).with_rows([
///     Row::new([Column::text("#1"), Column::text("main")]),
///     Row::new([Column::text("#2"), Column::text("helper")]),
/// ]);
/// screen.select(1);
///
/// let renderer = ScreenRenderer::new();
/// let frame = renderer.render(&mut screen);
/// assert_eq!(frame.window().len(), 2);
/// assert_eq!(frame.widths().row(0), Some(&[3u16, 17][..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScreenRenderer<R = PlainRowRenderer> {
    config: RenderConfig,
    row_renderer: R,
}

impl ScreenRenderer {
    /// Create a renderer with the default configuration and row renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            row_renderer: PlainRowRenderer::default(),
        }
    }
}

impl<R: RowRenderer> ScreenRenderer<R> {
    /// Swap in a different row renderer.
    pub fn with_row_renderer<N: RowRenderer>(self, row_renderer: N) -> ScreenRenderer<N> {
        ScreenRenderer {
            config: self.config,
            row_renderer,
        }
    }

    /// The active configuration.
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `screen` if it needs it and return its current frame.
    ///
    /// A clean screen is returned untouched.
    pub fn render<'s>(&self, screen: &'s mut Screen) -> &'s Frame {
        if screen.needs_render() {
            let frame = self.render_frame(screen.rows(), screen.layout(), screen.request());
            screen.finish_render(frame);
        }
        screen.frame()
    }

    /// Compute a frame from scratch without touching any screen.
    pub fn render_frame(&self, rows: &[Row], layout: Layout, request: WindowRequest) -> Frame {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "render_frame",
            rows = rows.len(),
            width = layout.width,
            height = layout.height
        )
        .entered();

        let widths = allocate(rows, layout, self.config.column_padding);

        let rendered: Vec<Vec<Line>> = rows
            .iter()
            .zip(widths.iter())
            .map(|(row, row_widths)| {
                self.row_renderer
                    .render_row(row, row_widths, layout, &self.config.color_scheme)
            })
            .collect();
        let total_lines: usize = rendered.iter().map(Vec::len).sum();

        let window = compute_window_with(
            &rendered,
            layout.height,
            request,
            self.config.after_selection,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(total_lines, window = window.len(), "frame rendered");

        Frame {
            widths,
            total_lines,
            window,
        }
    }
}
