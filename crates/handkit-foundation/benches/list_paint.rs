use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use handkit_foundation::{FixedSelection, ViewportState};
use handkit_ui_graphics::{Rect, Size};
use handkit_ui_layout::Axis;

const MODEL_SIZES: &[usize] = &[100, 10_000, 1_000_000];
const VIEWPORT: Rect = Rect::new(0, 0, 480, 800);

fn viewport(mode: FixedSelection) -> ViewportState {
    ViewportState {
        orientation: Axis::Vertical,
        mode,
        bounds: VIEWPORT,
        item_gap: 2,
        element_size: Size::new(480, 48),
        selected_element_size: Size::new(480, 64),
        ..ViewportState::default()
    }
}

fn bench_free_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_paint_free");
    let state = viewport(FixedSelection::None);
    for &model_size in MODEL_SIZES {
        group.bench_with_input(
            BenchmarkId::new("items", model_size),
            &model_size,
            |b, &model_size| {
                // Clip near the end of the list so the start-index estimate matters.
                let start = (model_size as i32 - 20).max(0) * 50;
                let clip = Rect::new(0, start, 480, 800);
                b.iter(|| black_box(state.paint(clip, Some(model_size / 2), model_size)));
            },
        );
    }
    group.finish();
}

fn bench_fixed_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_paint_fixed_center");
    let mut state = viewport(FixedSelection::Center);
    state.animation_offset = -17;
    for &model_size in &MODEL_SIZES[..2] {
        group.bench_with_input(
            BenchmarkId::new("items", model_size),
            &model_size,
            |b, &model_size| {
                b.iter(|| black_box(state.paint(VIEWPORT, Some(3), model_size)));
            },
        );
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_hit_test");
    for mode in [FixedSelection::None, FixedSelection::Center] {
        let state = viewport(mode);
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| black_box(state.hit_test(240, 700, Some(5), 10_000)));
        });
    }
    group.finish();
}

criterion_group!(list, bench_free_paint, bench_fixed_paint, bench_hit_test);
criterion_main!(list);
