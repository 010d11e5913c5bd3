//! Criterion benchmarks for performance-critical hot paths
//!
//! Covers: motion signal dispatch, poll advancement across many elements,
//! the displacement comparator, and full trace replay.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hoverintent::intent::{DwellController, IntentEvaluator, IntentOptions};
use hoverintent::replay::TraceReplayer;
use hoverintent::signal::{ElementId, Point, PointerSignal, SignalTrace};
use hoverintent::time::Timestamp;

fn at(ms: u64) -> Timestamp {
    Timestamp::from_millis(ms)
}

/// A trace that alternates dwells and transits across `elements` elements
fn generate_mixed_trace(elements: u64) -> SignalTrace {
    let mut trace = SignalTrace::new("bench".to_string(), None);
    let mut clock = 0u64;
    for i in 0..elements {
        let el = ElementId(i);
        let base = Point::new(i as f64 * 50.0, 0.0);
        trace.push(PointerSignal::enter(el, base, at(clock)));
        if i % 2 == 0 {
            // Dwell: settle inside the element for three intervals
            clock += 350;
            trace.push(PointerSignal::leave(el, base, at(clock)));
        } else {
            // Transit: a fast crossing, gone before the first poll
            trace.push(PointerSignal::motion(
                el,
                Point::new(base.x + 120.0, 0.0),
                at(clock + 20),
            ));
            clock += 40;
            trace.push(PointerSignal::leave(el, Point::new(base.x + 120.0, 0.0), at(clock)));
        }
        clock += 10;
    }
    trace.finalize();
    trace
}

// ---------------------------------------------------------------------------
// Signal dispatch benchmarks
// ---------------------------------------------------------------------------

fn bench_motion_dispatch(c: &mut Criterion) {
    c.bench_function("motion_dispatch", |b| {
        let mut controller = DwellController::new(IntentOptions::default());
        let el = ElementId(1);
        controller.handle(&PointerSignal::enter(el, Point::ZERO, at(0)));
        let motion = PointerSignal::motion(el, Point::new(40.0, 40.0), at(10));

        b.iter(|| {
            controller.handle(black_box(&motion));
        });
    });
}

fn bench_full_dwell_cycle(c: &mut Criterion) {
    c.bench_function("full_dwell_cycle", |b| {
        let mut controller = DwellController::new(IntentOptions::default())
            .on_enter(|element, _| {
                black_box(element);
            })
            .on_leave(|element, _| {
                black_box(element);
            });
        let el = ElementId(1);
        let mut clock = 0u64;

        b.iter(|| {
            controller.handle(&PointerSignal::enter(el, Point::ZERO, at(clock)));
            controller.handle(&PointerSignal::motion(
                el,
                Point::new(30.0, 0.0),
                at(clock + 20),
            ));
            controller.advance(at(clock + 200));
            controller.handle(&PointerSignal::leave(el, Point::ZERO, at(clock + 250)));
            controller.advance(at(clock + 250));
            clock += 300;
        });
    });
}

// ---------------------------------------------------------------------------
// Poll advancement benchmarks
// ---------------------------------------------------------------------------

fn bench_advance_many_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_many_elements");
    for count in [10u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut controller = DwellController::new(IntentOptions::default());
                for i in 0..count {
                    controller.handle(&PointerSignal::enter(
                        ElementId(i),
                        Point::new(i as f64, 0.0),
                        at(i),
                    ));
                }
                // One pass fires every element's confirming poll
                controller.advance(black_box(at(count + 100)));
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Comparator micro-benchmark
// ---------------------------------------------------------------------------

fn bench_evaluator(c: &mut Criterion) {
    let evaluator = IntentEvaluator::new(6.0);
    let baseline = Point::new(100.0, 100.0);
    let current = Point::new(104.0, 103.0);

    c.bench_function("evaluate_displacement", |b| {
        b.iter(|| {
            let verdict = evaluator.evaluate(black_box(baseline), black_box(current));
            black_box(verdict);
        });
    });
}

// ---------------------------------------------------------------------------
// Trace replay benchmarks
// ---------------------------------------------------------------------------

fn bench_trace_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_replay");
    for count in [10u64, 100, 500] {
        let trace = generate_mixed_trace(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &trace, |b, trace| {
            let replayer = TraceReplayer::default();
            b.iter(|| {
                let report = replayer.replay(black_box(trace)).expect("valid trace");
                black_box(report);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_motion_dispatch,
    bench_full_dwell_cycle,
    bench_advance_many_elements,
    bench_evaluator,
    bench_trace_replay,
);
criterion_main!(benches);
