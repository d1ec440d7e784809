use chart_markers::ChartError;
use chart_markers::config::{TRIANGLE_MARKER_CONFIG_JSON_SCHEMA_V1, TriangleMarkerConfig};
use chart_markers::core::MarkerPoint;
use chart_markers::markers::{HiddenMarkerPolicy, MarkerDirection};

#[test]
fn empty_object_yields_defaults() {
    let config = TriangleMarkerConfig::from_json_compat_str("{}").expect("config");
    assert_eq!(config, TriangleMarkerConfig::default());
    assert_eq!(config.fill_style.as_deref(), Some("#4682B4"));
    assert_eq!(config.stroke_width, Some(1.0));
    assert_eq!(config.opacity, 0.5);
}

#[test]
fn bare_config_overrides_and_clears_fields() {
    let config = TriangleMarkerConfig::from_json_compat_str(
        r#"{
            "direction": "left",
            "width": 14.0,
            "stroke_style": null,
            "hidden_policy": "draw_unrotated"
        }"#,
    )
    .expect("config");

    assert_eq!(config.direction, MarkerDirection::Left);
    assert_eq!(config.width, 14.0);
    assert_eq!(config.stroke_style, None);
    assert_eq!(config.hidden_policy, HiddenMarkerPolicy::DrawUnrotated);
    assert!(!config.raster_opacity);
}

#[test]
fn raster_opacity_flag_reaches_style() {
    let config =
        TriangleMarkerConfig::from_json_compat_str(r#"{"raster_opacity": true, "opacity": 0.4}"#)
            .expect("config");
    let style = config.into_style::<()>();
    assert!(style.raster_opacity);
    assert_eq!(style.opacity, 0.4);
}

#[test]
fn contract_v1_round_trips() {
    let config = TriangleMarkerConfig {
        direction: MarkerDirection::Right,
        opacity: 0.8,
        ..TriangleMarkerConfig::default()
    };
    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {TRIANGLE_MARKER_CONFIG_JSON_SCHEMA_V1}"
    )));
    assert!(json.contains("\"direction\": \"right\""));

    let parsed = TriangleMarkerConfig::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = TriangleMarkerConfig::from_json_compat_str(r#"{"schema_version": 2, "config": {}}"#)
        .expect_err("schema v2 must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = TriangleMarkerConfig::from_json_compat_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn config_converts_into_working_marker() {
    let config = TriangleMarkerConfig::from_json_compat_str(
        r#"{"direction": "bottom", "width": 6, "class_name": "sell"}"#,
    )
    .expect("config");
    let marker = config.into_marker::<()>();

    let polygon = marker
        .render(&MarkerPoint::bare(30.0, 30.0))
        .expect("visible marker");
    assert_eq!(polygon.class_name.as_deref(), Some("sell"));
    assert_eq!(
        polygon.transform_attribute().as_deref(),
        Some("rotate(180, 30, 30)")
    );
    assert_eq!(polygon.points[1].x - polygon.points[2].x, 6.0);
}
