//! Serializable marker configuration.
//!
//! Only constant styles can be expressed here; per-datum callbacks are attached
//! in code after converting with `into_style`.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::markers::{
    DEFAULT_CLASS_NAME, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_WIDTH, DEFAULT_OPACITY,
    DEFAULT_STROKE_WIDTH, HiddenMarkerPolicy, MarkerDirection, StyleValue, TriangleMarker,
    TriangleMarkerStyle,
};

pub const TRIANGLE_MARKER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Constant-only triangle marker style.
///
/// Missing fields take the marker defaults; an explicit `null` clears an
/// optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleMarkerConfig {
    pub direction: MarkerDirection,
    pub fill_style: Option<String>,
    pub stroke_style: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: f64,
    pub raster_opacity: bool,
    pub width: f64,
    pub class_name: Option<String>,
    pub hidden_policy: HiddenMarkerPolicy,
}

impl Default for TriangleMarkerConfig {
    fn default() -> Self {
        Self {
            direction: MarkerDirection::Top,
            fill_style: Some(DEFAULT_MARKER_COLOR.to_owned()),
            stroke_style: Some(DEFAULT_MARKER_COLOR.to_owned()),
            stroke_width: Some(DEFAULT_STROKE_WIDTH),
            opacity: DEFAULT_OPACITY,
            raster_opacity: false,
            width: DEFAULT_MARKER_WIDTH,
            class_name: Some(DEFAULT_CLASS_NAME.to_owned()),
            hidden_policy: HiddenMarkerPolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMarkerConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: TriangleMarkerConfig,
}

impl TriangleMarkerConfig {
    #[must_use]
    pub fn into_style<D>(self) -> TriangleMarkerStyle<D> {
        TriangleMarkerStyle {
            direction: StyleValue::Constant(self.direction),
            fill_style: self.fill_style.map(StyleValue::Constant),
            stroke_style: self.stroke_style.map(StyleValue::Constant),
            stroke_width: self.stroke_width,
            opacity: self.opacity,
            raster_opacity: self.raster_opacity,
            width: StyleValue::Constant(self.width),
            class_name: self.class_name,
            hidden_policy: self.hidden_policy,
        }
    }

    #[must_use]
    pub fn into_marker<D>(self) -> TriangleMarker<D> {
        TriangleMarker::new(self.into_style())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TriangleMarkerConfigJsonContractV1 {
            schema_version: TRIANGLE_MARKER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize marker config contract v1: {e}"))
        })
    }

    /// Accepts either a versioned contract or a bare config object.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse marker config json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse marker config json: {e}"))
            });
        }

        let payload: TriangleMarkerConfigJsonContractV1 =
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!(
                    "failed to parse marker config json payload: {e}"
                ))
            })?;
        if payload.schema_version != TRIANGLE_MARKER_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported marker config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
