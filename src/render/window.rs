//! Viewport windowing: picks the slice of rendered lines that fits the height.
//!
//! Two modes, chosen by [`WindowRequest`]:
//!
//! - **Selection**: walk rows in order and keep the selected row visible at
//!   the bottom. Once the window is full, lines from rows before the selection
//!   restart the window, and lines of the selected row slide it.
//! - **Cursor**: a plain forward slice of the flattened lines starting at the
//!   cursor offset.
//!
//! Out-of-range selections or cursors are not clamped; they produce whatever
//! partial window the walk yields.

use crate::model::WindowRequest;
use std::collections::VecDeque;

/// What rows after the selected one do while the window still has room.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum AfterSelection {
    /// Stop at the first row after the selection; the selected row ends the window.
    #[default]
    Stop,
    /// Keep filling leftover space with later rows, stop once the window is full.
    Fill,
}

/// Compute the visible window, stopping at the first row after the selection.
///
/// `rows` holds each row's rendered lines. Works on any line type so callers
/// can window plain strings as easily as styled [`crate::Line`]s.
pub fn compute_window<T, R>(rows: &[R], height: u16, request: WindowRequest) -> Vec<T>
where
    T: Clone,
    R: AsRef<[T]>,
{
    compute_window_with(rows, height, request, AfterSelection::Stop)
}

/// Compute the visible window with an explicit policy for rows after the selection.
pub fn compute_window_with<T, R>(
    rows: &[R],
    height: u16,
    request: WindowRequest,
    after_selection: AfterSelection,
) -> Vec<T>
where
    T: Clone,
    R: AsRef<[T]>,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("compute_window", rows = rows.len(), height).entered();

    let height = usize::from(height);
    if height == 0 {
        return Vec::new();
    }

    let window: Vec<T> = match request {
        WindowRequest::Selected(selected) => {
            selected_window(rows, height, selected, after_selection).into()
        }
        WindowRequest::Cursor(cursor) => cursor_window(rows, height, cursor),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(lines = window.len(), ?request, "window computed");

    window
}

fn selected_window<T, R>(
    rows: &[R],
    height: usize,
    selected: usize,
    after_selection: AfterSelection,
) -> VecDeque<T>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let mut window = VecDeque::with_capacity(height);

    for (row_index, row) in rows.iter().enumerate() {
        if row_index > selected && after_selection == AfterSelection::Stop {
            break;
        }
        for (line_index, line) in row.as_ref().iter().enumerate() {
            if window.len() < height {
                window.push_back(line.clone());
                continue;
            }
            if row_index > selected {
                return window;
            }
            // Full: earlier rows restart the window, the selected row slides it
            if row_index < selected || line_index == 0 {
                window.clear();
            } else {
                window.pop_front();
            }
            window.push_back(line.clone());
        }
    }

    window
}

fn cursor_window<T, R>(rows: &[R], height: usize, cursor: usize) -> Vec<T>
where
    T: Clone,
    R: AsRef<[T]>,
{
    rows.iter()
        .flat_map(|row| row.as_ref().iter())
        .skip(cursor)
        .take(height)
        .cloned()
        .collect()
}
