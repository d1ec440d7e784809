use chart_markers::core::MarkerPoint;
use chart_markers::markers::TriangleMarker;
use chart_markers::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_installs_subscriber_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}

#[test]
fn markers_render_after_tracing_init() {
    let _ = init_default_tracing();
    let marker: TriangleMarker<()> = TriangleMarker::default();
    assert!(marker.render(&MarkerPoint::bare(1.0, 1.0)).is_some());
}
