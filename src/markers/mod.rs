//! Per-datum styled markers.

mod direction;
mod style;
mod triangle;

pub use direction::{MarkerDirection, resolve_rotation};
pub use style::StyleValue;
pub use triangle::{
    DEFAULT_CLASS_NAME, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_WIDTH, DEFAULT_OPACITY,
    DEFAULT_STROKE_WIDTH, HiddenMarkerPolicy, TriangleMarker, TriangleMarkerStyle,
};
