// Benchmarks for planner editing
// Measures checkpoint cost as the day fills up and a full resize gesture

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heiko::services::event::{EventStore, NewEvent, ResizeEdge};
use heiko::services::geometry::PX_PER_HOUR;
use heiko::services::planner::{DayPlanner, PlannerOptions};

fn planner_with_events(count: usize) -> DayPlanner {
    let mut planner =
        DayPlanner::with_store(EventStore::with_id_seed(1), PlannerOptions::default());
    planner.set_column_count(4);
    for i in 0..count {
        let start = (i % 46) as f32 * 0.5;
        planner.create(NewEvent::new(start, start + 0.5, i % 4));
    }
    planner
}

fn bench_create_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_and_undo");

    for count in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut planner = planner_with_events(count);
            b.iter(|| {
                planner.create(NewEvent::new(black_box(20.0), 21.0, 0));
                planner.undo();
            });
        });
    }

    group.finish();
}

fn bench_resize_gesture(c: &mut Criterion) {
    c.bench_function("resize_gesture_48_moves", |b| {
        let mut planner = planner_with_events(100);
        let id = planner.events()[0].id;
        b.iter(|| {
            planner.begin_resize(id, ResizeEdge::Bottom);
            for step in 0..48 {
                planner.pointer_moved(black_box(step as f32 * PX_PER_HOUR / 2.0));
            }
            planner.release();
        });
    });
}

criterion_group!(benches, bench_create_and_undo, bench_resize_gesture);
criterion_main!(benches);
