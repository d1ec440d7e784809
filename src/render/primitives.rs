use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Vertex;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses any CSS color string: hex, `rgb()`/`rgba()`, `hsl()` and named colors.
    pub fn parse_css(value: &str) -> ChartResult<Self> {
        let parsed = csscolorparser::parse(value.trim()).map_err(|err| {
            ChartError::InvalidData(format!("unsupported css color `{value}`: {err}"))
        })?;
        let [red, green, blue, alpha] = parsed.to_array();
        Ok(Self::rgba(
            f64::from(red),
            f64::from(green),
            f64::from(blue),
            f64::from(alpha),
        ))
    }

    #[must_use]
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Rotation about a pivot, in degrees, clockwise in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationTransform {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

impl RotationTransform {
    #[must_use]
    pub const fn new(degrees: f64, cx: f64, cy: f64) -> Self {
        Self { degrees, cx, cy }
    }

    /// SVG `transform` attribute value.
    #[must_use]
    pub fn to_attribute(self) -> String {
        format!("rotate({}, {}, {})", self.degrees, self.cx, self.cy)
    }
}

/// Declarative filled and stroked polygon in pixel space.
///
/// Color strings are kept verbatim as supplied by the style; raster backends
/// parse them when painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub class_name: Option<String>,
    pub points: SmallVec<[Vertex; 4]>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill: Option<String>,
    pub fill_opacity: f64,
    pub rotation: Option<RotationTransform>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            class_name: None,
            points: points.into_iter().collect(),
            stroke: None,
            stroke_width: None,
            fill: None,
            fill_opacity: 1.0,
            rotation: None,
        }
    }

    /// `"x0 y0, x1 y1, ..."`, the SVG `points` attribute value.
    #[must_use]
    pub fn points_attribute(&self) -> String {
        let mut out = String::new();
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{} {}", point.x, point.y);
        }
        out
    }

    #[must_use]
    pub fn transform_attribute(&self) -> Option<String> {
        self.rotation.map(RotationTransform::to_attribute)
    }

    /// Serializes this node as a self-closing SVG `<polygon>` element.
    #[must_use]
    pub fn to_svg_element(&self) -> String {
        let mut out = String::from("<polygon");
        if let Some(class_name) = &self.class_name {
            push_attr(&mut out, "class", class_name);
        }
        push_attr(&mut out, "points", &self.points_attribute());
        if let Some(stroke) = &self.stroke {
            push_attr(&mut out, "stroke", stroke);
        }
        if let Some(width) = self.stroke_width {
            push_attr(&mut out, "stroke-width", &width.to_string());
        }
        push_attr(&mut out, "fill-opacity", &self.fill_opacity.to_string());
        if let Some(fill) = &self.fill {
            push_attr(&mut out, "fill", fill);
        }
        if let Some(transform) = self.transform_attribute() {
            push_attr(&mut out, "transform", &transform);
        }
        out.push_str("/>");
        out
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon requires at least three points".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        if self.stroke_width.is_some_and(|width| !width.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon stroke width must be finite".to_owned(),
            ));
        }
        if !self.fill_opacity.is_finite() {
            return Err(ChartError::InvalidData(
                "polygon fill opacity must be finite".to_owned(),
            ));
        }
        if let Some(rotation) = self.rotation {
            if !rotation.degrees.is_finite() || !rotation.cx.is_finite() || !rotation.cy.is_finite()
            {
                return Err(ChartError::InvalidData(
                    "polygon rotation must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
}

pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_attribute_values() {
        assert_eq!(escape_attr(r#"a"<b>&'"#), "a&quot;&lt;b&gt;&amp;&#39;");
    }

    #[test]
    fn short_hex_expands_each_digit() {
        let color = Color::parse_css("#f80").expect("color");
        assert!((color.green - 136.0 / 255.0).abs() <= 1e-6);
        assert!((color.red - 1.0).abs() <= 1e-6);
        assert!(color.blue.abs() <= 1e-6);
    }
}
