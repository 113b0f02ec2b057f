// ABOUTME: Tests for client environment configuration and nutrition goal limits
// ABOUTME: Covers required variables, feature flag parsing, enum validation, and env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meatmetrics::config::{
    AppEnvironment, ClientConfig, ConfigError, Feature, LogLevel, NutritionConfig, Theme,
};
use meatmetrics::errors::{AppError, ErrorCode};
use meatmetrics::logging::LogFormat;
use serial_test::serial;
use std::collections::HashMap;
use std::env;

mod common;

const GOAL_VARS: [&str; 8] = [
    "MEATMETRICS_GOAL_CALORIE_MIN",
    "MEATMETRICS_GOAL_CALORIE_MAX",
    "MEATMETRICS_GOAL_PROTEIN_MIN",
    "MEATMETRICS_GOAL_PROTEIN_MAX",
    "MEATMETRICS_GOAL_FAT_MIN",
    "MEATMETRICS_GOAL_FAT_MAX",
    "MEATMETRICS_GOAL_NET_CARBS_MIN",
    "MEATMETRICS_GOAL_NET_CARBS_MAX",
];

fn required_vars() -> HashMap<&'static str, String> {
    HashMap::from([
        ("MEATMETRICS_ENVIRONMENT", "development".to_owned()),
        ("MEATMETRICS_APP_NAME", "MeatMetrics".to_owned()),
        ("MEATMETRICS_APP_VERSION", "1.0.0".to_owned()),
        ("MEATMETRICS_API_BASE_URL", "http://localhost:8080".to_owned()),
        ("MEATMETRICS_JWT_TOKEN_KEY", "mm_access".to_owned()),
        ("MEATMETRICS_JWT_REFRESH_KEY", "mm_refresh".to_owned()),
    ])
}

fn load(vars: &HashMap<&'static str, String>) -> Result<ClientConfig, ConfigError> {
    ClientConfig::from_lookup(|name| vars.get(name).cloned())
}

fn clear_goal_vars() {
    for name in GOAL_VARS {
        env::remove_var(name);
    }
}

// ============================================================================
// CLIENT CONFIG
// ============================================================================

#[test]
fn test_minimal_environment_uses_defaults() {
    common::init_test_logging();
    let config = load(&required_vars()).unwrap();

    assert_eq!(config.environment, AppEnvironment::Development);
    assert!(config.is_development());
    assert!(!config.is_production());
    assert_eq!(config.proxy_target, "http://backend:8080");
    assert_eq!(config.default_locale, "ja");
    assert_eq!(config.theme, Theme::Light);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.is_debug_mode());

    assert!(config.features.is_enabled(Feature::FoodCatalog));
    assert!(config.features.is_enabled(Feature::MealTracking));
    assert!(config.features.is_enabled(Feature::DailySummary));
    assert!(config.features.is_enabled(Feature::GoalSetting));
    assert!(!config.features.is_enabled(Feature::DataAnalysis));
}

#[test]
fn test_each_required_variable_is_enforced() {
    for name in [
        "MEATMETRICS_ENVIRONMENT",
        "MEATMETRICS_APP_NAME",
        "MEATMETRICS_APP_VERSION",
        "MEATMETRICS_API_BASE_URL",
        "MEATMETRICS_JWT_TOKEN_KEY",
        "MEATMETRICS_JWT_REFRESH_KEY",
    ] {
        let mut vars = required_vars();
        vars.remove(name);

        match load(&vars) {
            Err(ConfigError::MissingField(missing)) => assert_eq!(missing, name),
            other => panic!("expected MissingField({name}), got {other:?}"),
        }
    }
}

#[test]
fn test_blank_required_variable_counts_as_missing() {
    let mut vars = required_vars();
    vars.insert("MEATMETRICS_API_BASE_URL", "   ".to_owned());

    assert!(matches!(
        load(&vars),
        Err(ConfigError::MissingField("MEATMETRICS_API_BASE_URL"))
    ));
}

#[test]
fn test_unknown_enumerated_values_are_rejected() {
    for (name, value) in [
        ("MEATMETRICS_ENVIRONMENT", "staging"),
        ("MEATMETRICS_APP_THEME", "sepia"),
        ("MEATMETRICS_LOG_LEVEL", "trace"),
    ] {
        let mut vars = required_vars();
        vars.insert(name, value.to_owned());

        let error = load(&vars).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)), "{name}: {error}");
        assert!(error.to_string().contains(value));
    }
}

#[test]
fn test_feature_flags_are_case_insensitive() {
    let mut vars = required_vars();
    vars.insert("MEATMETRICS_FEATURE_DATA_ANALYSIS", "TRUE".to_owned());
    vars.insert("MEATMETRICS_FEATURE_FOOD_CATALOG", "false".to_owned());
    vars.insert("MEATMETRICS_FEATURE_GOAL_SETTING", "yes".to_owned());
    vars.insert("MEATMETRICS_DEBUG_MODE", "True".to_owned());

    let config = load(&vars).unwrap();

    assert!(config.features.is_enabled(Feature::DataAnalysis));
    assert!(!config.features.is_enabled(Feature::FoodCatalog));
    assert!(!config.features.is_enabled(Feature::GoalSetting));
    assert!(config.is_debug_mode());
}

#[test]
fn test_production_settings() {
    let mut vars = required_vars();
    vars.insert("MEATMETRICS_ENVIRONMENT", "production".to_owned());
    vars.insert("MEATMETRICS_APP_THEME", "dark".to_owned());
    vars.insert("MEATMETRICS_LOG_LEVEL", "warn".to_owned());
    vars.insert("MEATMETRICS_DEFAULT_LOCALE", "en".to_owned());

    let config = load(&vars).unwrap();

    assert!(config.is_production());
    assert_eq!(config.theme, Theme::Dark);
    assert_eq!(config.log_level.to_tracing_level(), tracing::Level::WARN);
    assert_eq!(config.default_locale, "en");
}

#[test]
fn test_config_errors_map_onto_app_errors() {
    let missing = AppError::from(ConfigError::MissingField("MEATMETRICS_APP_NAME"));
    assert_eq!(missing.code, ErrorCode::ConfigMissing);
    assert!(missing.message.contains("MEATMETRICS_APP_NAME"));

    let invalid = AppError::from(ConfigError::Parse("bad".to_owned()));
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert_eq!(invalid.code.http_status(), 500);
}

// ============================================================================
// NUTRITION CONFIG
// ============================================================================

#[test]
#[serial]
fn test_nutrition_config_defaults() {
    clear_goal_vars();

    let config = NutritionConfig::load().unwrap();

    assert_eq!(config, NutritionConfig::default());
    assert!((config.goal_limits.calories.min - 800.0).abs() < common::EPSILON);
    assert!((config.goal_limits.net_carbs_g.max - 150.0).abs() < common::EPSILON);
}

#[test]
#[serial]
fn test_nutrition_config_env_overrides() {
    clear_goal_vars();
    env::set_var("MEATMETRICS_GOAL_NET_CARBS_MAX", "50");
    env::set_var("MEATMETRICS_GOAL_CALORIE_MIN", " 1200 ");

    let config = NutritionConfig::load().unwrap();

    assert!((config.goal_limits.net_carbs_g.max - 50.0).abs() < common::EPSILON);
    assert!((config.goal_limits.calories.min - 1200.0).abs() < common::EPSILON);
    assert!((config.goal_limits.protein_g.max - 500.0).abs() < common::EPSILON);
    clear_goal_vars();
}

#[test]
#[serial]
fn test_nutrition_config_rejects_unparseable_override() {
    clear_goal_vars();
    env::set_var("MEATMETRICS_GOAL_FAT_MAX", "lots");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("MEATMETRICS_GOAL_FAT_MAX"));
    clear_goal_vars();
}

#[test]
#[serial]
fn test_nutrition_config_rejects_inverted_range() {
    clear_goal_vars();
    env::set_var("MEATMETRICS_GOAL_PROTEIN_MIN", "600");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::InvalidRange("protein goal limits")));
    clear_goal_vars();
}

#[test]
fn test_validate_rejects_negative_bounds() {
    let mut config = NutritionConfig::default();
    config.goal_limits.fat_g.min = -1.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange("fat goal limits"))
    ));
}

// ============================================================================
// LOGGING
// ============================================================================

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}
