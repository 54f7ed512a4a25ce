use chart_layout::core::{CanvasSize, ScaleOptions, autoscale, scale};
use chart_layout::layout::{AxisStyle, ChartStyle, LayoutEngine, RotationStyle};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_scale_plain(c: &mut Criterion) {
    let options = ScaleOptions::default();

    c.bench_function("scale_plain", |b| {
        b.iter(|| {
            let _ = scale(black_box(0.2137), black_box(6.5421), black_box(&options))
                .expect("scale should succeed");
        })
    });
}

fn bench_autoscale_100k(c: &mut Criterion) {
    let options = ScaleOptions::default();
    let samples: Vec<f64> = (0..100_000)
        .map(|i| {
            let t = i as f64 * 0.001;
            t.sin() * 40.0 + t * 0.01
        })
        .collect();

    c.bench_function("autoscale_100k", |b| {
        b.iter(|| {
            let _ = autoscale(black_box(&samples), black_box(&options))
                .expect("autoscale should succeed");
        })
    });
}

fn bench_autoscale_100k_trusted(c: &mut Criterion) {
    let options = ScaleOptions::default().with_check_limits(false);
    let samples: Vec<f64> = (0..100_000).map(|i| (i as f64 * 0.0007).cos()).collect();

    c.bench_function("autoscale_100k_trusted", |b| {
        b.iter(|| {
            let _ = autoscale(black_box(&samples), black_box(&options))
                .expect("autoscale should succeed");
        })
    });
}

fn bench_layout_pass(c: &mut Criterion) {
    let style = ChartStyle::default()
        .with_title("Benchmark")
        .with_x_axis(AxisStyle::default().with_label("time"))
        .with_y_axis(
            AxisStyle::default()
                .with_label("value")
                .with_label_rotation(RotationStyle::Up45)
                .with_minor_per_major(4),
        );
    let engine = LayoutEngine::new(style);
    let canvas = CanvasSize::new(1920.0, 1080.0);
    let options = ScaleOptions::default();
    let x = scale(0.2, 6.5, &options).expect("valid scale");
    let y = scale(-431.7, 1287.3, &options).expect("valid scale");

    c.bench_function("layout_pass", |b| {
        b.iter(|| {
            let _ = engine
                .layout(black_box(canvas), black_box(x), black_box(y))
                .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_plain,
    bench_autoscale_100k,
    bench_autoscale_100k_trusted,
    bench_layout_pass
);
criterion_main!(benches);
