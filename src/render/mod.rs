mod context;
mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use context::{DrawCommand, DrawingContext, RecordingContext};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolygonPrimitive, RotationTransform};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any declarative rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from marker styling logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextRenderer, CairoDrawingContext, CairoRenderStats, CairoRenderer,
};
