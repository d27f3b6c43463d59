use criterion::{Criterion, criterion_group, criterion_main};
use plotgl::api::{Axes, AxesConfig};
use plotgl::core::{
    Axis, AxisTickConfig, ScaleMode, TickRequest, Transform, Viewport, generate_ticks,
};
use plotgl::render::RecordingScene;
use std::hint::black_box;

fn bench_transform_round_trip(c: &mut Criterion) {
    let mut transform = Transform::new(0.0, 10_000.0).expect("valid transform");
    transform.zoom(2_500.0, 7_500.0).expect("valid zoom");

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let position = transform.evaluate(black_box(4_321.123));
            let _ = transform.inverse(position);
        })
    });
}

fn bench_tick_generation_log_axis(c: &mut Criterion) {
    let transform = Transform::new(-3.0, 6.0).expect("valid transform");
    let config = AxisTickConfig::default();
    let locator = config.resolve_locator(Axis::Y, ScaleMode::Log, 1_080.0);
    let formatter = config.resolve_formatter(ScaleMode::Log);
    let request = TickRequest {
        axis: Axis::Y,
        range: (1e-3, 1e6),
        scale: ScaleMode::Log,
        transform: &transform,
        span_px: 1_080.0,
    };

    c.bench_function("tick_generation_log_axis", |b| {
        b.iter(|| {
            let _ = generate_ticks(black_box(&request), locator.as_ref(), formatter.as_ref());
        })
    });
}

fn bench_autoscale_100k_points(c: &mut Criterion) {
    let mut axes = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(1600, 900)))
        .expect("axes init");
    let x: Vec<f64> = (0..100_000).map(|i| i as f64 * 0.01).collect();
    let y: Vec<f64> = x.iter().map(|value| value.sin() * 50.0 + 100.0).collect();
    axes.plot(x.clone(), y.clone()).expect("line");
    axes.scatter(x, y).expect("points");

    c.bench_function("autoscale_100k_points", |b| {
        b.iter(|| {
            axes.autoscale();
        })
    });
}

fn bench_log_rescale_100k_points(c: &mut Criterion) {
    let mut axes = Axes::new(RecordingScene::new(), AxesConfig::new(Viewport::new(1600, 900)))
        .expect("axes init");
    let x: Vec<f64> = (1..=100_000).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|value| value.sqrt()).collect();
    axes.plot(x, y).expect("line");

    c.bench_function("log_rescale_100k_points", |b| {
        b.iter(|| {
            axes.set_xscale(ScaleMode::Log).expect("log x");
            axes.set_xscale(ScaleMode::Linear).expect("linear x");
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_tick_generation_log_axis,
    bench_autoscale_100k_points,
    bench_log_rescale_100k_points
);
criterion_main!(benches);
