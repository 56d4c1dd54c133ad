#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.density_divisor, 8000.0);
    assert_eq!(cfg.radius, 0.5..2.5);
    assert_eq!(cfg.velocity, -0.25..0.25);
    assert_eq!(cfg.opacity, 0.5..1.0);
    assert_eq!(cfg.fill_rgb, (255, 255, 255));
}

#[test]
fn default_is_valid() {
    assert!(FieldConfig::default().validate().is_ok());
}

#[test]
fn zero_divisor_rejected() {
    let cfg = FieldConfig { density_divisor: 0.0, ..FieldConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::Density(0.0)));
}

#[test]
fn nan_divisor_rejected() {
    let cfg = FieldConfig { density_divisor: f64::NAN, ..FieldConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Density(_))));
}

#[test]
fn empty_radius_range_rejected() {
    let cfg = FieldConfig { radius: 2.0..2.0, ..FieldConfig::default() };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::Range { name: "radius", start: 2.0, end: 2.0 })
    );
}

#[test]
fn inverted_velocity_range_rejected() {
    let cfg = FieldConfig { velocity: 1.0..-1.0, ..FieldConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Range { name: "velocity", .. })));
}

#[test]
fn infinite_range_rejected() {
    let cfg = FieldConfig { radius: 0.0..f64::INFINITY, ..FieldConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Range { name: "radius", .. })));
}

#[test]
fn opacity_above_one_rejected() {
    let cfg = FieldConfig { opacity: 0.5..1.5, ..FieldConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::Opacity { start: 0.5, end: 1.5 }));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::Range { name: "radius", start: 3.0, end: 1.0 };
    assert_eq!(err.to_string(), "radius range is empty or not finite: 3..1");
}

#[test]
fn tiny_divisor_rejected() {
    let cfg = FieldConfig { density_divisor: 1e-300, ..FieldConfig::default() };
    assert_eq!(cfg.validate(), Err(ConfigError::Density(1e-300)));
}

#[test]
fn divisor_of_one_accepted() {
    let cfg = FieldConfig { density_divisor: 1.0, ..FieldConfig::default() };
    assert!(cfg.validate().is_ok());
}

// --- serde ---

#[test]
fn json_round_trip_preserves_config() {
    let cfg = FieldConfig { density_divisor: 4000.0, fill_rgb: (0, 200, 255), ..FieldConfig::default() };
    let raw = serde_json::to_string(&cfg).unwrap();
    let back: FieldConfig = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn json_ranges_use_start_and_end() {
    let value = serde_json::to_value(FieldConfig::default()).unwrap();
    assert_eq!(value["radius"], serde_json::json!({ "start": 0.5, "end": 2.5 }));
    assert_eq!(value["fill_rgb"], serde_json::json!([255, 255, 255]));
}
