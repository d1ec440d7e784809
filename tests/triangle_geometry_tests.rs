use approx::assert_relative_eq;
use chart_markers::core::{TriangleLayout, Vertex, triangle_geometry, triangle_vertices};

#[test]
fn geometry_offsets_match_equilateral_construction() {
    let geometry = triangle_geometry(10.0);
    assert_relative_eq!(geometry.inner_hypotenuse, 5.0 / 3.0_f64.sqrt() * 2.0, epsilon = 1e-12);
    assert_relative_eq!(geometry.inner_opposite, 5.0 / 3.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn vertices_place_apex_above_and_base_below_anchor() {
    let [apex, right, left] = triangle_vertices(100.0, 50.0, 10.0);

    assert_relative_eq!(apex.x, 100.0);
    assert_relative_eq!(apex.y, 44.226_497_308_103_74, epsilon = 1e-9);
    assert_relative_eq!(right.x, 105.0);
    assert_relative_eq!(left.x, 95.0);
    assert_relative_eq!(right.y, 52.886_751_345_948_13, epsilon = 1e-9);
    assert_relative_eq!(left.y, right.y);
}

#[test]
fn triangle_sides_are_equal() {
    let [a, b, c] = triangle_vertices(3.0, 7.0, 24.0);
    let dist = |p: Vertex, q: Vertex| ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt();

    assert_relative_eq!(dist(a, b), 24.0, epsilon = 1e-9);
    assert_relative_eq!(dist(b, c), 24.0, epsilon = 1e-9);
    assert_relative_eq!(dist(c, a), 24.0, epsilon = 1e-9);
}

#[test]
fn negative_width_is_degenerate_but_finite() {
    let vertices = triangle_vertices(10.0, 10.0, -4.0);
    assert!(vertices.iter().all(|v| v.is_finite()));
    assert!(vertices[1].x < vertices[2].x);
}

#[test]
fn layout_reports_rotation_in_radians() {
    let layout = TriangleLayout::new(0.0, 0.0, 8.0, -90.0);
    assert!(layout.is_rotated());
    assert_relative_eq!(layout.rotation_radians(), -std::f64::consts::FRAC_PI_2);

    let upright = TriangleLayout::new(0.0, 0.0, 8.0, 0.0);
    assert!(!upright.is_rotated());
}
