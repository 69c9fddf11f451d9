use chart_axes::AxisError;
use chart_axes::api::{AxisConfig, ChartSettings, ZoomTransform};
use chart_axes::core::{AxisRole, ColumnType, Extent, PadUnit, PaddingMode, Viewport};

const SETTINGS_JSON: &str = r#"{
    "crossValues": [{ "name": "region", "type": "string" }],
    "mainValues": [
        { "name": "rev", "type": "float" },
        { "name": "cost", "type": "float" }
    ],
    "splitMainValues": ["cost"],
    "size": { "width": 800, "height": 600 },
    "zoom": { "k": 2.0, "x": -10.0, "y": 0.0 },
    "axisMemo": { "main": { "min": 0.0, "max": 120.0 } }
}"#;

#[test]
fn settings_parse_from_camel_case_json() {
    let settings = ChartSettings::from_json_str(SETTINGS_JSON).expect("parse settings");

    assert_eq!(settings.cross_values.len(), 1);
    assert_eq!(settings.cross_values[0].column_type, ColumnType::String);
    assert_eq!(settings.columns(AxisRole::MainValues).len(), 2);
    assert!(settings.split_values.is_empty());
    assert_eq!(settings.size, Viewport::new(800, 600));
    assert_eq!(
        settings.zoom,
        Some(ZoomTransform {
            k: 2.0,
            x: -10.0,
            y: 0.0
        })
    );
    assert_eq!(settings.axis_memo.main, Some(Extent::new(0.0, 120.0)));
    assert!(settings.axis_memo.alt_main.is_none());
    assert!(settings.split_assignment().is_alternate("cost"));
    assert!(settings.split_assignment().have_split(&settings.main_values));
}

#[test]
fn settings_survive_a_json_round_trip() {
    let settings = ChartSettings::from_json_str(SETTINGS_JSON).expect("parse settings");
    let json = settings.to_json_pretty().expect("serialize");
    let parsed = ChartSettings::from_json_str(&json).expect("reparse");
    assert_eq!(parsed, settings);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings = ChartSettings::from_json_str("{}").expect("parse empty settings");
    assert_eq!(settings, ChartSettings::default());
    assert!(settings.zoom.is_none());
}

#[test]
fn malformed_settings_are_rejected() {
    let json = r#"{ "crossValues": [{ "name": "x", "type": "decimal" }] }"#;
    let err = ChartSettings::from_json_str(json).expect_err("unknown column type");
    assert!(matches!(err, AxisError::InvalidData(_)));

    let err = ChartSettings::from_json_str("not json").expect_err("not json");
    assert!(matches!(err, AxisError::InvalidData(_)));
}

#[test]
fn axis_config_deserializes_with_padding_strategy() {
    let json = r#"{
        "role": "mainValues",
        "valueNames": ["mainValue"],
        "include": [0.0],
        "padding": { "mode": "hardLimitZero", "pad": [0.0, 0.1], "padUnit": "percent" },
        "memo": { "min": -5.0, "max": 5.0 }
    }"#;
    let config: AxisConfig = serde_json::from_str(json).expect("parse axis config");

    assert_eq!(config.role, AxisRole::MainValues);
    assert_eq!(config.value_names, vec!["mainValue".to_owned()]);
    assert_eq!(config.include, vec![0.0]);
    let padding = config.padding.expect("padding");
    assert_eq!(padding.mode, PaddingMode::HardLimitZero);
    assert_eq!(padding.pad_unit, PadUnit::Percent);
    assert_eq!(config.memo, Some(Extent::new(-5.0, 5.0)));
    assert!(config.exclude_type.is_none());
}
