//! Render module: width allocation, row rendering and windowing.
//!
//! This module contains:
//! - [`allocator`]: fixed/flexible column classification and width resolution
//! - [`RowRenderer`]: the seam that turns a row into rendered [`Line`]s
//! - [`window`]: selection and cursor windowing over rendered lines
//! - [`ScreenRenderer`]: the render pass tying them together

pub mod allocator;
mod line;
mod row_renderer;
mod screen_renderer;
pub mod window;

pub use allocator::{allocate, ColumnWidth, ColumnWidths};
pub use line::{Cell, Line};
pub use row_renderer::{PlainRowRenderer, RowRenderer};
pub use screen_renderer::{Frame, RenderConfig, ScreenRenderer};
pub use window::{compute_window, compute_window_with, AfterSelection};
