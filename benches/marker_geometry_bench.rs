use chart_markers::core::{MarkerPoint, Viewport, triangle_vertices};
use chart_markers::markers::{MarkerDirection, StyleValue, TriangleMarker, TriangleMarkerStyle};
use chart_markers::render::RecordingContext;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_points() -> Vec<MarkerPoint<f64>> {
    (0..10_000)
        .map(|i| {
            let t = i as f64;
            let change = if i % 3 == 0 { 0.0 } else { (t * 0.37).sin() };
            MarkerPoint::new(t * 0.2, 300.0 + change * 40.0, change)
        })
        .collect()
}

fn signal_marker() -> TriangleMarker<f64> {
    TriangleMarker::new(
        TriangleMarkerStyle::default()
            .with_width(9.0)
            .with_direction(StyleValue::derived(|change: &f64| {
                if *change > 0.0 {
                    MarkerDirection::Top
                } else if *change < 0.0 {
                    MarkerDirection::Bottom
                } else {
                    MarkerDirection::Hide
                }
            }))
            .with_fill_style(StyleValue::derived(|change: &f64| {
                let color = if *change >= 0.0 { "#26a69a" } else { "#ef5350" };
                color.to_owned()
            })),
    )
}

fn bench_triangle_vertices(c: &mut Criterion) {
    c.bench_function("triangle_vertices", |b| {
        b.iter(|| triangle_vertices(black_box(120.5), black_box(48.25), black_box(11.0)))
    });
}

fn bench_render_frame_10k(c: &mut Criterion) {
    let points = sample_points();
    let marker = signal_marker();
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("triangle_render_frame_10k", |b| {
        b.iter(|| marker.render_frame(black_box(&points), black_box(viewport)))
    });
}

fn bench_draw_on_recording_context_10k(c: &mut Criterion) {
    let points = sample_points();
    let marker = signal_marker();

    c.bench_function("triangle_draw_recording_10k", |b| {
        b.iter(|| {
            let mut ctx = RecordingContext::new();
            marker
                .draw_all_on_context(&mut ctx, black_box(&points))
                .expect("draw should succeed")
        })
    });
}

criterion_group!(
    benches,
    bench_triangle_vertices,
    bench_render_frame_10k,
    bench_draw_on_recording_context_10k
);
criterion_main!(benches);
