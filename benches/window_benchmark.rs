//! Window benchmark: Measure windowing and full render passes.
//!
//! Target: < 1ms for a 200×50 render pass over 1000 rows

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rowview::{compute_window, Column, Layout, Row, Screen, ScreenRenderer, WindowRequest};

fn create_lines(rows: usize, lines_per_row: usize) -> Vec<Vec<u32>> {
    (0..rows)
        .map(|r| (0..lines_per_row).map(|l| (r * lines_per_row + l) as u32).collect())
        .collect()
}

fn window_selection_at_end(c: &mut Criterion) {
    let lines = create_lines(1000, 3);
    c.bench_function("window_select_last_of_1000", |b| {
        b.iter(|| compute_window(black_box(&lines), 50, WindowRequest::Selected(999)))
    });
}

fn window_cursor_middle(c: &mut Criterion) {
    let lines = create_lines(1000, 3);
    c.bench_function("window_cursor_1500", |b| {
        b.iter(|| compute_window(black_box(&lines), 50, WindowRequest::Cursor(1500)))
    });
}

fn full_render_pass(c: &mut Criterion) {
    let rows: Vec<Row> = (0..1000)
        .map(|i| {
            Row::new([
                Column::text(format!("#{i}")),
                Column::text(format!("method_{i}")),
                Column::text(format!("lib/some/path/file_{i}.rb:{}", i * 3)),
            ])
        })
        .collect();
    let renderer = ScreenRenderer::new();

    c.bench_function("render_pass_200x50_1000_rows", |b| {
        b.iter(|| {
            let mut screen = Screen::new(Layout::new(200, 50))
                .with_rows(rows.iter().cloned())
                .with_request(WindowRequest::Selected(500));
            renderer.render(&mut screen).window().len()
        })
    });
}

criterion_group!(
    benches,
    window_selection_at_end,
    window_cursor_middle,
    full_render_pass,
);
criterion_main!(benches);
