use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::MarkerPoint;
use crate::markers::TriangleMarkerStyle;

/// Pointing orientation of a triangle marker, or `Hide` to suppress it.
///
/// Parsing is lenient: any unrecognized name is treated as `Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarkerDirection {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Hide,
}

impl MarkerDirection {
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        match name {
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "hide" => Self::Hide,
            _ => Self::Top,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Hide => "hide",
        }
    }

    /// Clockwise rotation from the apex-up layout; `None` means do not render.
    #[must_use]
    pub const fn rotation_degrees(self) -> Option<f64> {
        match self {
            Self::Top => Some(0.0),
            Self::Right => Some(90.0),
            Self::Bottom => Some(180.0),
            Self::Left => Some(-90.0),
            Self::Hide => None,
        }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hide)
    }
}

impl FromStr for MarkerDirection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<&str> for MarkerDirection {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl From<String> for MarkerDirection {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<MarkerDirection> for String {
    fn from(value: MarkerDirection) -> Self {
        value.as_str().to_owned()
    }
}

/// Resolves the style's direction for `point` and maps it to degrees.
///
/// The direction value is resolved exactly once.
#[must_use]
pub fn resolve_rotation<D>(style: &TriangleMarkerStyle<D>, point: &MarkerPoint<D>) -> Option<f64> {
    style.direction.resolve(&point.datum).rotation_degrees()
}
