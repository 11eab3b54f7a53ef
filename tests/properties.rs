//! Property tests for width allocation and windowing.

use proptest::prelude::*;
use rowview::{
    allocate, compute_window, Column, Layout, Row, Screen, ScreenRenderer, WindowRequest,
};

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        prop::collection::vec("[a-z ]{0,40}", 0..6)
            .prop_map(|texts| texts.into_iter().map(Column::text).collect::<Row>()),
        0..10,
    )
}

/// Rendered rows as line labels, `line_counts[i]` lines for row `i`.
fn labelled(line_counts: &[usize]) -> Vec<Vec<(usize, usize)>> {
    line_counts
        .iter()
        .enumerate()
        .map(|(row, &n)| (0..n).map(|line| (row, line)).collect())
        .collect()
}

proptest! {
    #[test]
    fn rows_sum_to_viewport_width(
        rows in rows_strategy(),
        width in 0u16..300,
        padding in 0u16..4,
    ) {
        let widths = allocate(&rows, Layout::new(width, 10), padding);
        for (row, row_widths) in rows.iter().zip(widths.iter()) {
            prop_assert_eq!(row.len(), row_widths.len());
            if !row.is_empty() {
                let sum: u32 = row_widths.iter().copied().map(u32::from).sum();
                prop_assert_eq!(sum, u32::from(width));
            }
        }
    }

    #[test]
    fn zero_width_resolves_to_zero(rows in rows_strategy()) {
        let widths = allocate(&rows, Layout::new(0, 10), 1);
        for row_widths in widths.iter() {
            prop_assert!(row_widths.iter().all(|&w| w == 0));
        }
    }

    #[test]
    fn render_is_idempotent_while_clean(
        rows in rows_strategy(),
        width in 1u16..120,
        height in 0u16..30,
        selected in 0usize..12,
    ) {
        let renderer = ScreenRenderer::new();
        let mut screen = Screen::new(Layout::new(width, height))
            .with_rows(rows)
            .with_request(WindowRequest::Selected(selected));

        let first = renderer.render(&mut screen).clone();
        prop_assert!(!screen.needs_render());
        let second = renderer.render(&mut screen).clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn window_never_exceeds_height(
        line_counts in prop::collection::vec(0usize..6, 0..12),
        height in 0u16..10,
        target in 0usize..40,
        cursor_mode in any::<bool>(),
    ) {
        let rows = labelled(&line_counts);
        let request = if cursor_mode {
            WindowRequest::Cursor(target)
        } else {
            WindowRequest::Selected(target)
        };
        let window = compute_window(&rows, height, request);
        prop_assert!(window.len() <= usize::from(height));
    }

    #[test]
    fn selected_row_ends_the_window(
        line_counts in prop::collection::vec(1usize..5, 1..12),
        height in 1u16..10,
        selected in 0usize..12,
    ) {
        prop_assume!(selected < line_counts.len());
        prop_assume!(line_counts[selected] <= usize::from(height));

        let rows = labelled(&line_counts);
        let window = compute_window(&rows, height, WindowRequest::Selected(selected));

        let last_line = line_counts[selected] - 1;
        prop_assert_eq!(window.last().copied(), Some((selected, last_line)));
        // Every line of the selected row is visible
        for line in 0..=last_line {
            prop_assert!(window.contains(&(selected, line)));
        }
        // Nothing after the selection
        prop_assert!(window.iter().all(|&(row, _)| row <= selected));
    }

    #[test]
    fn cursor_is_a_forward_slice(
        line_counts in prop::collection::vec(0usize..5, 0..12),
        height in 1u16..10,
        cursor in 0usize..40,
    ) {
        let rows = labelled(&line_counts);
        let flattened: Vec<(usize, usize)> = rows.iter().flatten().copied().collect();
        let window = compute_window(&rows, height, WindowRequest::Cursor(cursor));

        if cursor < flattened.len() {
            prop_assert_eq!(window[0], flattened[cursor]);
            let expected = usize::from(height).min(flattened.len() - cursor);
            prop_assert_eq!(window.len(), expected);
            prop_assert_eq!(&window[..], &flattened[cursor..cursor + expected]);
        } else {
            prop_assert!(window.is_empty());
        }
    }
}

#[test]
fn scenario_fixed_columns_with_residual_fill() {
    let rows = vec![Row::new([Column::text("abc"), Column::text("abcde")])];
    let widths = allocate(&rows, Layout::new(20, 5), 1);
    assert_eq!(widths.row(0), Some(&[4u16, 16][..]));
}

#[test]
fn scenario_selection_with_single_line_viewport() {
    let rows = labelled(&[1, 1, 1]);
    let window = compute_window(&rows, 1, WindowRequest::Selected(1));
    assert_eq!(window, vec![(1, 0)]);
}

#[test]
fn scenario_selection_fill_phase() {
    let rows = labelled(&[1, 1, 1]);
    let window = compute_window(&rows, 2, WindowRequest::Selected(1));
    assert_eq!(window, vec![(0, 0), (1, 0)]);
}

#[test]
fn scenario_cursor_slice() {
    let rows = vec![vec!["L0", "L1", "L2", "L3", "L4"]];
    let window: Vec<&str> = compute_window(&rows, 2, WindowRequest::Cursor(2));
    assert_eq!(window, vec!["L2", "L3"]);
}
