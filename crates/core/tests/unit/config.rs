//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use pretty_assertions::assert_eq;
use tinycpu_core::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.stack_capacity, 256);
    assert_eq!(config.step_budget, 1_000_000);
}

#[test]
fn test_from_json_overrides_fields() {
    let config = Config::from_json(r#"{"stack_capacity": 64}"#).unwrap();
    assert_eq!(config.stack_capacity, 64);
    assert_eq!(config.step_budget, 1_000_000);

    let config = Config::from_json(r#"{"stack_capacity": 8, "step_budget": 10}"#).unwrap();
    assert_eq!(config.stack_capacity, 8);
    assert_eq!(config.step_budget, 10);
}

#[test]
fn test_from_json_empty_object_is_the_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_json_rejects_unknown_fields() {
    assert!(Config::from_json(r#"{"stack_cap": 64}"#).is_err());
}

#[test]
fn test_from_json_rejects_malformed_text() {
    assert!(Config::from_json("not json").is_err());
}
