use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One vertex in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Marker anchor produced by the host chart's scales.
///
/// `datum` is the opaque row the point was projected from; style callbacks
/// receive it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint<D> {
    pub x: f64,
    pub y: f64,
    pub datum: D,
}

impl<D> MarkerPoint<D> {
    #[must_use]
    pub fn new(x: f64, y: f64, datum: D) -> Self {
        Self { x, y, datum }
    }

    #[must_use]
    pub fn position(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }
}

impl MarkerPoint<()> {
    /// Point without per-row data, for constant styles.
    #[must_use]
    pub fn bare(x: f64, y: f64) -> Self {
        Self::new(x, y, ())
    }
}
