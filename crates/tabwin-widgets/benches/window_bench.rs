//! Windowing throughput benchmarks: steady scroll, far jumps, and the
//! unchanged-window fast path.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tabwin_core::mock::MockSurface;
use tabwin_core::surface::Surface;
use tabwin_widgets::{EndIndexPolicy, RowConstruction, TableRow, WindowController};

const ROW_COUNT: usize = 1_000_000;
const ROW_HEIGHT: u32 = 20;
const VIEWPORT: u32 = 800;

fn populate(surface: &mut dyn Surface, recycled: Option<TableRow>, index: usize) -> TableRow {
    let mut row = recycled.unwrap_or_else(|| TableRow::new(surface, 4));
    row.reset();
    row.set_cell(0, index.to_string());
    row
}

fn warm_controller() -> (WindowController, MockSurface) {
    let mut ctl = WindowController::new(
        ROW_COUNT,
        ROW_HEIGHT,
        30,
        4,
        EndIndexPolicy::Extent,
        RowConstruction::Controller,
    );
    let mut surface = MockSurface::with_viewport(VIEWPORT);
    ctl.recompute(0, VIEWPORT, &mut surface, &mut populate);
    surface.take_ops();
    (ctl, surface)
}

fn bench_steady_scroll(c: &mut Criterion) {
    c.bench_function("scroll_one_row_step", |b| {
        b.iter_batched(
            warm_controller,
            |(mut ctl, mut surface)| {
                let mut offset = 0u64;
                for _ in 0..64 {
                    offset += u64::from(ROW_HEIGHT);
                    ctl.recompute(offset, VIEWPORT, &mut surface, &mut populate);
                    surface.take_ops();
                }
                (ctl, surface)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_far_jump(c: &mut Criterion) {
    c.bench_function("scroll_far_jump", |b| {
        b.iter_batched(
            warm_controller,
            |(mut ctl, mut surface)| {
                // Disjoint windows: every row round-trips through the pool.
                ctl.recompute(10_000_000, VIEWPORT, &mut surface, &mut populate);
                ctl.recompute(0, VIEWPORT, &mut surface, &mut populate);
                (ctl, surface)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_noop_recompute(c: &mut Criterion) {
    let (mut ctl, mut surface) = warm_controller();
    c.bench_function("recompute_unchanged_window", |b| {
        b.iter(|| ctl.recompute(0, VIEWPORT, &mut surface, &mut populate));
    });
}

criterion_group!(
    benches,
    bench_steady_scroll,
    bench_far_jump,
    bench_noop_recompute
);
criterion_main!(benches);
