use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridlift_core::{resolve_candidate, GridPosition, Rect, Size};
use gridlift_testing::{GridSpec, TestGrid};

fn bench_resolution(c: &mut Criterion) {
    let grid = TestGrid::single_section(
        GridSpec {
            columns: 10,
            cell: Size::new(100.0, 100.0),
            spacing: 8.0,
            section_gap: 0.0,
            bounds: Size::new(1080.0, 1920.0),
        },
        (0..1000).map(|i| i.to_string()),
    );
    // Mid-grid position straddling four neighbors.
    let dragged = Rect::new(490.0, 5230.0, 100.0, 100.0);

    c.bench_function("resolve_candidate/1000-items", |b| {
        b.iter(|| {
            resolve_candidate(
                black_box(GridPosition::new(0, 0)),
                black_box(dragged),
                &grid,
            )
        })
    });
}

criterion_group!(benches, bench_resolution);
criterion_main!(benches);
