// Benchmark for commit-time merging
// Measures folding freshly dragged blocks into stores of growing size

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use availability_grid::services::geometry::TimeGeometry;
use availability_grid::services::store::IntervalStore;
use availability_grid::{
    AvailabilityEngine, AvailabilityKind, DayOfWeek, DragController, GridSettings, PointerEvent,
    PointerTarget, SelectionArgs,
};

/// Non-overlapping hour blocks spread over the week, with one long block per
/// day appended last so it has to absorb the rest
fn crowded_store(count: usize) -> IntervalStore {
    let mut store = IntervalStore::new();
    for i in 0..count {
        let day = DayOfWeek::from_index(i % 5).unwrap_or(DayOfWeek::Monday);
        let start = 420 + ((i / 5) as u32 % 7) * 130;
        store.add(&SelectionArgs::new(day, AvailabilityKind::Busy, start, start + 60));
    }
    for day in &DayOfWeek::ALL[..5] {
        store.add(&SelectionArgs::new(*day, AvailabilityKind::Busy, 420, 1380));
    }
    store
}

fn bench_commit_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_merge");

    for count in [10, 100, 1000].iter() {
        let store = crowded_store(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| {
                let mut store = store.clone();
                store.commit_merge(black_box(5));
                store
            });
        });
    }

    group.finish();
}

fn bench_cross_day_gesture(c: &mut Criterion) {
    let settings = GridSettings::default();
    let gesture = [
        PointerEvent::Down {
            day: DayOfWeek::Monday,
            y: 60.0,
            target: PointerTarget::Empty,
        },
        PointerEvent::Move { y: 120.0 },
        PointerEvent::Enter {
            day: DayOfWeek::Wednesday,
            y: 150.0,
        },
        PointerEvent::Enter {
            day: DayOfWeek::Friday,
            y: 200.0,
        },
        PointerEvent::Up { y: 240.0 },
    ];

    c.bench_function("paint_monday_to_friday", |b| {
        b.iter(|| {
            let mut engine = AvailabilityEngine::for_term(settings.clone(), "bench");
            let mut drag = DragController::new(TimeGeometry::new(0.0, 960.0, &settings));
            for event in gesture {
                drag.handle(&mut engine, black_box(event));
            }
            engine
        });
    });
}

criterion_group!(benches, bench_commit_merge, bench_cross_day_gesture);
criterion_main!(benches);
