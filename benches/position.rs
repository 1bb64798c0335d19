use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use popover_placement::{
    PlacementConfig, PositionRequest, Rect, Side, Size, calculate_position_with,
    evaluate_candidates, intersect_rectangles, parse_scenarios,
};
use std::hint::black_box;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

fn request(name: &str) -> PositionRequest {
    let base = PositionRequest {
        preferred: Side::Top,
        trigger: Rect::new(500.0, 500.0, 25.0, 25.0),
        arrow: Size {
            width: 15.0,
            height: 15.0,
        },
        body: Size {
            width: 250.0,
            height: 250.0,
        },
        container: VIEWPORT,
        viewport: VIEWPORT,
        render_with_portal: false,
    };
    match name {
        // Early exit on the first candidate.
        "first_fit" => base,
        // Fit pass walks most of the list before a corner alignment fits.
        "late_fit" => PositionRequest {
            container: Rect::new(450.0, 250.0, 350.0, 1000.0),
            ..base
        },
        // Nothing fits, every candidate is scored and the winner clamped.
        "fallback" => PositionRequest {
            trigger: Rect::new(200.0, 200.0, 25.0, 25.0),
            body: Size {
                width: 250.0,
                height: 1000.0,
            },
            container: Rect::new(0.0, 0.0, 1000.0, 1100.0),
            ..base
        },
        "fallback_portal" => PositionRequest {
            trigger: Rect::new(800.0, 800.0, 25.0, 25.0),
            body: Size {
                width: 250.0,
                height: 1000.0,
            },
            container: Rect::new(0.0, 0.0, 1000.0, 2000.0),
            render_with_portal: true,
            ..base
        },
        _ => base,
    }
}

fn bench_calculate(c: &mut Criterion) {
    let config = PlacementConfig::default();
    let mut group = c.benchmark_group("calculate_position");
    for name in ["first_fit", "late_fit", "fallback", "fallback_portal"] {
        let req = request(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &req, |b, req| {
            b.iter(|| black_box(calculate_position_with(&config, black_box(req))));
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let config = PlacementConfig::default();
    let req = request("fallback");
    c.bench_function("evaluate_candidates", |b| {
        b.iter(|| black_box(evaluate_candidates(&config, black_box(&req)).len()));
    });
}

fn bench_intersect(c: &mut Criterion) {
    let rects = [
        Rect::new(-14.5, 40.0, 250.0, 250.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(0.0, 0.0, 1000.0, 600.0),
    ];
    c.bench_function("intersect_rectangles", |b| {
        b.iter(|| black_box(intersect_rectangles(black_box(&rects))));
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let input = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/edge_crowding.json5"
    ));
    let config = PlacementConfig::default();
    c.bench_function("end_to_end_scenarios", |b| {
        b.iter(|| {
            let scenarios = parse_scenarios(black_box(input)).expect("parse failed");
            for scenario in &scenarios {
                black_box(calculate_position_with(&config, &scenario.request()));
            }
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_calculate, bench_evaluate, bench_intersect, bench_end_to_end
);
criterion_main!(benches);
