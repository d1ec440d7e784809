use cairo::{Context, Format, ImageSurface};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingContext, PolygonPrimitive, RenderFrame, Renderer};

const SVG_DEFAULT_FILL: Color = Color::rgb(0.0, 0.0, 0.0);
const SVG_DEFAULT_STROKE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub fills: usize,
    pub strokes: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend for declarative marker frames.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for polygon in &frame.polygons {
            paint_polygon(context, polygon, &mut stats)?;
            stats.polygons_drawn += 1;
        }

        debug!(
            polygons = stats.polygons_drawn,
            fills = stats.fills,
            strokes = stats.strokes,
            "rendered cairo frame"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn paint_polygon(
    context: &Context,
    polygon: &PolygonPrimitive,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;

    if let Some(rotation) = polygon.rotation {
        context.translate(rotation.cx, rotation.cy);
        context.rotate(rotation.degrees.to_radians());
        context.translate(-rotation.cx, -rotation.cy);
    }

    context.new_path();
    if let Some((first, rest)) = polygon.points.split_first() {
        context.move_to(first.x, first.y);
        for point in rest {
            context.line_to(point.x, point.y);
        }
        context.close_path();
    }

    let fill = match polygon.fill.as_deref() {
        Some(fill) => parse_color_or_warn(fill),
        None => Some(SVG_DEFAULT_FILL),
    };
    if let Some(fill) = fill {
        apply_color(context, fill.with_alpha_factor(polygon.fill_opacity));
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        stats.fills += 1;
    }

    let stroke_width = polygon.stroke_width.unwrap_or(SVG_DEFAULT_STROKE_WIDTH);
    if let Some(stroke) = polygon.stroke.as_deref().and_then(parse_color_or_warn) {
        if stroke_width > 0.0 {
            apply_color(context, stroke);
            context.set_line_width(stroke_width);
            context
                .stroke_preserve()
                .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
            stats.strokes += 1;
        }
    }

    context.new_path();
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PaintState {
    stroke: Color,
    fill: Color,
    global_alpha: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke: Color::rgb(0.0, 0.0, 0.0),
            fill: Color::rgb(0.0, 0.0, 0.0),
            global_alpha: 1.0,
        }
    }
}

/// Canvas-style adapter over a borrowed Cairo context.
///
/// Cairo has a single source, so separate stroke and fill colors are tracked
/// here and applied right before each paint operation. They are saved and
/// restored alongside the Cairo state.
pub struct CairoDrawingContext<'a> {
    context: &'a Context,
    state: PaintState,
    saved: Vec<PaintState>,
}

impl<'a> CairoDrawingContext<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            state: PaintState::default(),
            saved: Vec::new(),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        self.context
    }
}

impl std::fmt::Debug for CairoDrawingContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoDrawingContext")
            .field("state", &self.state)
            .field("save_depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

impl DrawingContext for CairoDrawingContext<'_> {
    fn set_stroke_style(&mut self, color: &str) {
        if let Some(color) = parse_color_or_warn(color) {
            self.state.stroke = color;
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_fill_style(&mut self, color: &str) {
        if let Some(color) = parse_color_or_warn(color) {
            self.state.fill = color;
        }
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        self.saved.push(self.state);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        let state = self.saved.pop().ok_or_else(|| {
            ChartError::InvalidData("restore called without a matching save".to_owned())
        })?;
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        self.state = state;
        Ok(())
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.context.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        self.context.rotate(radians);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(
            self.context,
            self.state.stroke.with_alpha_factor(self.state.global_alpha),
        );
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> ChartResult<()> {
        apply_color(
            self.context,
            self.state.fill.with_alpha_factor(self.state.global_alpha),
        );
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }
}

fn parse_color_or_warn(value: &str) -> Option<Color> {
    match Color::parse_css(value) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(color = value, error = %err, "ignoring unsupported color");
            None
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
