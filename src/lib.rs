//! # Rowview
//!
//! Column-width allocation and scroll windowing for row/column terminal screens.
//!
//! A caller builds a [`Screen`] of [`Row`]s, each made of [`Column`]s of
//! styled [`Span`]s, and hands it to a [`ScreenRenderer`]. One render pass:
//!
//! - **Allocates widths**: every column index is either fixed (widest content
//!   plus padding) or flexible (equal share of what is left), and the last
//!   column of each row takes the residual so rows sum to the viewport width.
//! - **Renders rows** through a [`RowRenderer`] into styled [`Line`]s.
//! - **Windows** the lines to the viewport height, either keeping a selected
//!   row visible or slicing from a cursor line offset.
//!
//! ## Example
//!
//! ```rust
//! use rowview::{Column, Layout, Row, Screen, ScreenRenderer};
//!
//! let mut screen = Screen::new(Layout::new(40, 10));
//! for i in 0..20 {
//!     screen.push_row(Row::new([
//!         Column::text(format!("#{i}")),
//!         Column::text(format!("frame_{i} at lib/app.rb:{i}")),
//!     ]));
//! }
//! screen.select(15);
//!
//! let frame = ScreenRenderer::new().render(&mut screen);
//! assert!(frame.window().len() <= 10);
//! assert!(frame.window().last().unwrap().text().starts_with("#15"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod model;
pub mod render;
pub mod style;

// Re-exports for convenience
pub use error::{Result, ScreenError};
pub use model::{Column, Layout, Row, Screen, Span, WindowRequest};
pub use render::{
    allocate, compute_window, compute_window_with, AfterSelection, Cell, ColumnWidth,
    ColumnWidths, Frame, Line, PlainRowRenderer, RenderConfig, RowRenderer, ScreenRenderer,
};
pub use style::{ColorScheme, Modifiers, Rgb, SpanRole, Style};
