use chart_markers::core::{MarkerPoint, triangle_geometry, triangle_vertices};
use chart_markers::markers::{TriangleMarker, TriangleMarkerStyle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base_span_equals_width_and_apex_is_centered(
        x in -5_000.0f64..5_000.0,
        y in -5_000.0f64..5_000.0,
        width in 0.01f64..500.0
    ) {
        let [apex, right, left] = triangle_vertices(x, y, width);
        let geometry = triangle_geometry(width);

        prop_assert!((right.x - left.x - width).abs() <= 1e-9 * width.max(1.0));
        prop_assert!((right.y - left.y).abs() <= 1e-12);
        prop_assert!((apex.x - x).abs() <= 1e-12);
        prop_assert!((y - apex.y - geometry.inner_hypotenuse).abs() <= 1e-9);
        prop_assert!((right.y - y - geometry.inner_opposite).abs() <= 1e-9);
        prop_assert!(apex.y < y && y < right.y);
    }

    #[test]
    fn polygon_render_is_idempotent(
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        width in 0.5f64..64.0,
        direction_index in 0usize..5
    ) {
        let names = ["top", "bottom", "left", "right", "hide"];
        let marker = TriangleMarker::new(
            TriangleMarkerStyle::default()
                .with_width(width)
                .with_direction(chart_markers::MarkerDirection::from(names[direction_index])),
        );
        let point = MarkerPoint::bare(x, y);

        let first = marker.render(&point);
        let second = marker.render(&point);
        prop_assert_eq!(first.is_none(), direction_index == 4);
        prop_assert_eq!(first, second);
    }
}
