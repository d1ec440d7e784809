use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{MarkerPoint, TriangleLayout, Viewport};
use crate::error::ChartResult;
use crate::markers::{MarkerDirection, StyleValue, resolve_rotation};
use crate::render::{DrawingContext, PolygonPrimitive, RenderFrame, RotationTransform};

pub const DEFAULT_MARKER_COLOR: &str = "#4682B4";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_OPACITY: f64 = 0.5;
pub const DEFAULT_MARKER_WIDTH: f64 = 8.0;
pub const DEFAULT_CLASS_NAME: &str = "chart-marker-triangle";

/// How the raster path treats markers whose direction resolves to `Hide`.
///
/// The polygon path never renders hidden markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenMarkerPolicy {
    /// Draw nothing.
    #[default]
    Skip,
    /// Draw the apex-up triangle anyway. Kept for hosts that relied on the
    /// raster path ignoring `hide`.
    DrawUnrotated,
}

/// Style of a triangle marker. Every field may be constant or per-datum.
pub struct TriangleMarkerStyle<D> {
    pub direction: StyleValue<D, MarkerDirection>,
    pub fill_style: Option<StyleValue<D, String>>,
    pub stroke_style: Option<StyleValue<D, String>>,
    pub stroke_width: Option<f64>,
    /// Fill opacity. Not range-checked. Applied to polygons always, and to
    /// raster fills only when `raster_opacity` is set.
    pub opacity: f64,
    pub raster_opacity: bool,
    /// Base width in pixels.
    pub width: StyleValue<D, f64>,
    pub class_name: Option<String>,
    pub hidden_policy: HiddenMarkerPolicy,
}

impl<D> Default for TriangleMarkerStyle<D> {
    fn default() -> Self {
        Self {
            direction: StyleValue::Constant(MarkerDirection::Top),
            fill_style: Some(DEFAULT_MARKER_COLOR.into()),
            stroke_style: Some(DEFAULT_MARKER_COLOR.into()),
            stroke_width: Some(DEFAULT_STROKE_WIDTH),
            opacity: DEFAULT_OPACITY,
            raster_opacity: false,
            width: StyleValue::Constant(DEFAULT_MARKER_WIDTH),
            class_name: Some(DEFAULT_CLASS_NAME.to_owned()),
            hidden_policy: HiddenMarkerPolicy::Skip,
        }
    }
}

impl<D> Clone for TriangleMarkerStyle<D> {
    fn clone(&self) -> Self {
        Self {
            direction: self.direction.clone(),
            fill_style: self.fill_style.clone(),
            stroke_style: self.stroke_style.clone(),
            stroke_width: self.stroke_width,
            opacity: self.opacity,
            raster_opacity: self.raster_opacity,
            width: self.width.clone(),
            class_name: self.class_name.clone(),
            hidden_policy: self.hidden_policy,
        }
    }
}

impl<D> std::fmt::Debug for TriangleMarkerStyle<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleMarkerStyle")
            .field("direction", &self.direction)
            .field("fill_style", &self.fill_style)
            .field("stroke_style", &self.stroke_style)
            .field("stroke_width", &self.stroke_width)
            .field("opacity", &self.opacity)
            .field("raster_opacity", &self.raster_opacity)
            .field("width", &self.width)
            .field("class_name", &self.class_name)
            .field("hidden_policy", &self.hidden_policy)
            .finish()
    }
}

impl<D> TriangleMarkerStyle<D> {
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<StyleValue<D, MarkerDirection>>) -> Self {
        self.direction = direction.into();
        self
    }

    #[must_use]
    pub fn with_fill_style(mut self, fill_style: impl Into<StyleValue<D, String>>) -> Self {
        self.fill_style = Some(fill_style.into());
        self
    }

    #[must_use]
    pub fn without_fill_style(mut self) -> Self {
        self.fill_style = None;
        self
    }

    #[must_use]
    pub fn with_stroke_style(mut self, stroke_style: impl Into<StyleValue<D, String>>) -> Self {
        self.stroke_style = Some(stroke_style.into());
        self
    }

    #[must_use]
    pub fn without_stroke_style(mut self) -> Self {
        self.stroke_style = None;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn without_stroke_width(mut self) -> Self {
        self.stroke_width = None;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Also applies `opacity` as global alpha when filling on a raster context.
    #[must_use]
    pub fn with_raster_opacity(mut self, enabled: bool) -> Self {
        self.raster_opacity = enabled;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<StyleValue<D, f64>>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn without_class_name(mut self) -> Self {
        self.class_name = None;
        self
    }

    #[must_use]
    pub fn with_hidden_policy(mut self, hidden_policy: HiddenMarkerPolicy) -> Self {
        self.hidden_policy = hidden_policy;
        self
    }
}

/// Equilateral triangle marker centered on its point, apex up by default.
pub struct TriangleMarker<D> {
    style: TriangleMarkerStyle<D>,
}

impl<D> std::fmt::Debug for TriangleMarker<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleMarker")
            .field("style", &self.style)
            .finish()
    }
}

impl<D> Default for TriangleMarker<D> {
    fn default() -> Self {
        Self::new(TriangleMarkerStyle::default())
    }
}

impl<D> Clone for TriangleMarker<D> {
    fn clone(&self) -> Self {
        Self::new(self.style.clone())
    }
}

impl<D> TriangleMarker<D> {
    #[must_use]
    pub fn new(style: TriangleMarkerStyle<D>) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> &TriangleMarkerStyle<D> {
        &self.style
    }

    /// Geometry and rotation for `point`, or `None` when the marker is hidden.
    #[must_use]
    pub fn layout(&self, point: &MarkerPoint<D>) -> Option<TriangleLayout> {
        self.layout_with_policy(point, HiddenMarkerPolicy::Skip)
    }

    fn layout_with_policy(
        &self,
        point: &MarkerPoint<D>,
        hidden_policy: HiddenMarkerPolicy,
    ) -> Option<TriangleLayout> {
        let rotation = match (resolve_rotation(&self.style, point), hidden_policy) {
            (Some(degrees), _) => degrees,
            (None, HiddenMarkerPolicy::DrawUnrotated) => 0.0,
            (None, HiddenMarkerPolicy::Skip) => return None,
        };
        let width = self.style.width.resolve(&point.datum);
        Some(TriangleLayout::new(point.x, point.y, width, rotation))
    }

    /// Declarative polygon for `point`, or `None` when the marker is hidden.
    #[must_use]
    pub fn render(&self, point: &MarkerPoint<D>) -> Option<PolygonPrimitive> {
        let layout = self.layout(point)?;
        let fill = self
            .style
            .fill_style
            .as_ref()
            .map(|fill| fill.resolve(&point.datum));
        let stroke = self
            .style
            .stroke_style
            .as_ref()
            .map(|stroke| stroke.resolve(&point.datum));

        let mut polygon = PolygonPrimitive::new(layout.vertices);
        polygon.class_name = self.style.class_name.clone();
        polygon.stroke = stroke;
        polygon.stroke_width = self.style.stroke_width;
        polygon.fill = fill;
        polygon.fill_opacity = self.style.opacity;
        polygon.rotation = layout.is_rotated().then(|| {
            RotationTransform::new(layout.rotation_degrees, layout.center.x, layout.center.y)
        });
        Some(polygon)
    }

    /// Draws the marker onto an immediate-mode context.
    ///
    /// Stroke color, line width and fill color are left set on the context.
    /// The transform is restored before returning. Returns `false` when the
    /// marker was skipped as hidden.
    pub fn draw_on_context<C>(&self, ctx: &mut C, point: &MarkerPoint<D>) -> ChartResult<bool>
    where
        C: DrawingContext + ?Sized,
    {
        let Some(layout) = self.layout_with_policy(point, self.style.hidden_policy) else {
            trace!(x = point.x, y = point.y, "skip hidden triangle marker");
            return Ok(false);
        };

        if let Some(stroke) = &self.style.stroke_style {
            ctx.set_stroke_style(&stroke.resolve(&point.datum));
        }
        if let Some(stroke_width) = self.style.stroke_width {
            ctx.set_line_width(stroke_width);
        }
        if let Some(fill) = &self.style.fill_style {
            ctx.set_fill_style(&fill.resolve(&point.datum));
        }

        let fill_alpha = self.style.raster_opacity.then_some(self.style.opacity);
        ctx.save()?;
        let painted = paint_local_triangle(ctx, &layout, fill_alpha);
        let restored = ctx.restore();
        painted.and(restored)?;
        Ok(true)
    }

    /// Polygons for every visible marker in `points`.
    #[must_use]
    pub fn render_frame(&self, points: &[MarkerPoint<D>], viewport: Viewport) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport);
        frame.polygons.extend(points.iter().filter_map(|point| self.render(point)));
        debug!(
            rendered = frame.polygons.len(),
            hidden = points.len() - frame.polygons.len(),
            "built triangle marker frame"
        );
        frame
    }

    /// Draws every marker in `points` and returns how many were drawn.
    pub fn draw_all_on_context<C>(&self, ctx: &mut C, points: &[MarkerPoint<D>]) -> ChartResult<usize>
    where
        C: DrawingContext + ?Sized,
    {
        let mut drawn = 0;
        for point in points {
            if self.draw_on_context(ctx, point)? {
                drawn += 1;
            }
        }
        debug!(
            drawn,
            skipped = points.len() - drawn,
            "drew triangle markers on context"
        );
        Ok(drawn)
    }
}

impl<D> From<TriangleMarkerStyle<D>> for TriangleMarker<D> {
    fn from(style: TriangleMarkerStyle<D>) -> Self {
        Self::new(style)
    }
}

// Path is built around the origin after translating to the anchor, so one
// rotation covers both the stroke and the fill.
fn paint_local_triangle<C>(
    ctx: &mut C,
    layout: &TriangleLayout,
    fill_alpha: Option<f64>,
) -> ChartResult<()>
where
    C: DrawingContext + ?Sized,
{
    ctx.translate(layout.center.x, layout.center.y);
    if layout.is_rotated() {
        ctx.rotate(layout.rotation_radians());
    }

    let [apex, right, left] = layout.local_vertices();
    ctx.begin_path();
    ctx.move_to(apex.x, apex.y);
    ctx.line_to(right.x, right.y);
    ctx.line_to(left.x, left.y);
    ctx.close_path();
    ctx.stroke()?;

    if let Some(alpha) = fill_alpha {
        ctx.set_global_alpha(alpha);
    }
    ctx.fill()
}
