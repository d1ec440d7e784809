pub mod geometry;
pub mod types;

pub use geometry::{
    TriangleGeometry, TriangleLayout, local_triangle_vertices, triangle_geometry,
    triangle_vertices,
};
pub use types::{MarkerPoint, Vertex, Viewport};
