//! Screen: the aggregate handed to the renderer each pass.

use super::layout::Layout;
use super::row::Row;
use crate::render::{Frame, Line};

/// Which part of the content the window must keep visible.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WindowRequest {
    /// Keep this row index fully visible at the bottom of the viewport.
    Selected(usize),
    /// Show lines starting at this offset into the flattened line sequence.
    Cursor(usize),
}

impl Default for WindowRequest {
    fn default() -> Self {
        Self::Selected(0)
    }
}

/// Rows plus viewport geometry plus the last rendered frame.
///
/// Every content mutator marks the screen dirty. [`crate::ScreenRenderer`]
/// skips screens that are clean.
#[derive(Clone, Debug)]
pub struct Screen {
    rows: Vec<Row>,
    layout: Layout,
    request: WindowRequest,
    dirty: bool,
    frame: Frame,
}

impl Screen {
    /// Create an empty screen for the given viewport.
    pub fn new(layout: Layout) -> Self {
        Self {
            rows: Vec::new(),
            layout,
            request: WindowRequest::default(),
            dirty: true,
            frame: Frame::default(),
        }
    }

    /// Set the rows (builder pattern).
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the window request (builder pattern).
    #[must_use]
    pub fn with_request(mut self, request: WindowRequest) -> Self {
        self.set_request(request);
        self
    }

    /// The rows of the screen.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The viewport size.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// The current window request.
    pub const fn request(&self) -> WindowRequest {
        self.request
    }

    /// The selected row, if the screen is in selection mode.
    pub const fn selected(&self) -> Option<usize> {
        match self.request {
            WindowRequest::Selected(row) => Some(row),
            WindowRequest::Cursor(_) => None,
        }
    }

    /// The cursor line offset, if the screen is in cursor mode.
    pub const fn cursor(&self) -> Option<usize> {
        match self.request {
            WindowRequest::Cursor(line) => Some(line),
            WindowRequest::Selected(_) => None,
        }
    }

    /// Replace all rows.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows = rows.into_iter().collect();
        self.dirty = true;
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
        self.dirty = true;
    }

    /// Change the viewport size.
    pub fn set_layout(&mut self, layout: Layout) {
        if layout != self.layout {
            self.layout = layout;
            self.dirty = true;
        }
    }

    /// Change the window request.
    pub fn set_request(&mut self, request: WindowRequest) {
        if request != self.request {
            self.request = request;
            self.dirty = true;
        }
    }

    /// Switch to selection mode on the given row.
    pub fn select(&mut self, row: usize) {
        self.set_request(WindowRequest::Selected(row));
    }

    /// Switch to cursor mode at the given line offset.
    pub fn set_cursor(&mut self, line: usize) {
        self.set_request(WindowRequest::Cursor(line));
    }

    /// Check whether the next render pass has work to do.
    pub const fn needs_render(&self) -> bool {
        self.dirty
    }

    /// Force the next render pass to recompute.
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The frame produced by the last render pass.
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The visible lines produced by the last render pass.
    pub fn window(&self) -> &[Line] {
        self.frame.window()
    }

    pub(crate) fn finish_render(&mut self, frame: Frame) {
        self.frame = frame;
        self.dirty = false;
    }
}
