use serde::{Deserialize, Serialize};

use crate::core::types::Vertex;

/// Vertical offsets of an equilateral triangle centered on its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleGeometry {
    /// Distance from the anchor up to the apex.
    pub inner_hypotenuse: f64,
    /// Distance from the anchor down to the base.
    pub inner_opposite: f64,
}

#[must_use]
pub fn triangle_geometry(width: f64) -> TriangleGeometry {
    let half = width / 2.0;
    TriangleGeometry {
        inner_hypotenuse: half / 30.0_f64.to_radians().cos(),
        inner_opposite: half / 60.0_f64.to_radians().tan(),
    }
}

/// Apex first, then the right and left base corners.
#[must_use]
pub fn triangle_vertices(x: f64, y: f64, width: f64) -> [Vertex; 3] {
    let TriangleGeometry {
        inner_hypotenuse,
        inner_opposite,
    } = triangle_geometry(width);
    [
        Vertex::new(x, y - inner_hypotenuse),
        Vertex::new(x + width / 2.0, y + inner_opposite),
        Vertex::new(x - width / 2.0, y + inner_opposite),
    ]
}

/// Same triangle as `triangle_vertices` relative to an anchor at the origin.
#[must_use]
pub fn local_triangle_vertices(width: f64) -> [Vertex; 3] {
    triangle_vertices(0.0, 0.0, width)
}

/// Backend-agnostic result of geometry and direction resolution for one marker.
///
/// Both the polygon and the raster path consume this, so vertices and rotation
/// are computed exactly once per marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleLayout {
    pub center: Vertex,
    pub width: f64,
    pub vertices: [Vertex; 3],
    /// Clockwise rotation about `center`, applied after the apex-up layout.
    pub rotation_degrees: f64,
}

impl TriangleLayout {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, rotation_degrees: f64) -> Self {
        Self {
            center: Vertex::new(x, y),
            width,
            vertices: triangle_vertices(x, y, width),
            rotation_degrees,
        }
    }

    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees != 0.0
    }

    #[must_use]
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }

    #[must_use]
    pub fn local_vertices(&self) -> [Vertex; 3] {
        local_triangle_vertices(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_vertices_are_translated_absolute_vertices() {
        let absolute = triangle_vertices(12.0, -3.0, 6.0);
        let local = local_triangle_vertices(6.0);
        for (a, l) in absolute.iter().zip(local.iter()) {
            assert!((a.x - 12.0 - l.x).abs() <= 1e-12);
            assert!((a.y + 3.0 - l.y).abs() <= 1e-12);
        }
    }

    #[test]
    fn zero_width_collapses_to_anchor() {
        let vertices = triangle_vertices(4.0, 5.0, 0.0);
        assert!(vertices.iter().all(|v| *v == Vertex::new(4.0, 5.0)));
    }
}
