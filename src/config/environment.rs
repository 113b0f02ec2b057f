// ABOUTME: Environment configuration for the MeatMetrics client
// ABOUTME: Parses MEATMETRICS_* variables into typed deployment, feature, and UI settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Environment-based client configuration
//!
//! Every setting comes from a `MEATMETRICS_*` variable; there are no config
//! files. Required variables fail loading when absent, optional ones fall
//! back to the documented defaults.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Proxy target used when `MEATMETRICS_PROXY_TARGET` is unset
pub const DEFAULT_PROXY_TARGET: &str = "http://backend:8080";

/// Locale used when `MEATMETRICS_DEFAULT_LOCALE` is unset
pub const DEFAULT_LOCALE: &str = "ja";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Test,
}

impl AppEnvironment {
    /// Literal value of the variable
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::Parse(format!(
                "Invalid MEATMETRICS_ENVIRONMENT '{other}' (expected development, production or test)"
            ))),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI color theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ConfigError::Parse(format!(
                "Invalid MEATMETRICS_APP_THEME '{other}' (expected light or dark)"
            ))),
        }
    }
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(ConfigError::Parse(format!(
                "Invalid MEATMETRICS_LOG_LEVEL '{other}' (expected debug, info, warn or error)"
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

/// Toggleable client features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Food catalog browsing
    FoodCatalog,
    /// Meal recording
    MealTracking,
    /// Daily summary view
    DailySummary,
    /// Nutritional goal editing
    GoalSetting,
    /// Trend analysis
    DataAnalysis,
}

/// Feature flag state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // One flag per toggleable feature
pub struct FeatureFlags {
    /// Food catalog browsing
    pub food_catalog: bool,
    /// Meal recording
    pub meal_tracking: bool,
    /// Daily summary view
    pub daily_summary: bool,
    /// Nutritional goal editing
    pub goal_setting: bool,
    /// Trend analysis
    pub data_analysis: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            food_catalog: true,
            meal_tracking: true,
            daily_summary: true,
            goal_setting: true,
            data_analysis: false,
        }
    }
}

impl FeatureFlags {
    /// Whether `feature` is switched on
    #[must_use]
    pub const fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::FoodCatalog => self.food_catalog,
            Feature::MealTracking => self.meal_tracking,
            Feature::DailySummary => self.daily_summary,
            Feature::GoalSetting => self.goal_setting,
            Feature::DataAnalysis => self.data_analysis,
        }
    }
}

/// Client configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application display name
    pub app_name: String,
    /// Application version
    pub app_version: String,
    /// Deployment environment
    pub environment: AppEnvironment,
    /// Base URL of the backend API
    pub api_base_url: String,
    /// Storage key for the access token
    pub jwt_token_key: String,
    /// Storage key for the refresh token
    pub jwt_refresh_key: String,
    /// Development proxy target
    pub proxy_target: String,
    /// Feature flags
    pub features: FeatureFlags,
    /// UI theme
    pub theme: Theme,
    /// Default UI locale
    pub default_locale: String,
    /// Debug mode switch
    pub debug_mode: bool,
    /// Client log level
    pub log_level: LogLevel,
}

/// A flag is on only for a case-insensitive `true`
fn parse_flag(value: Option<&str>, default: bool) -> bool {
    value.map_or(default, |v| v.trim().eq_ignore_ascii_case("true"))
}

impl ClientConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `MissingField` when a required variable is absent and `Parse`
    /// when an enumerated variable holds an unrecognised value
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingField(name))
        };

        let environment: AppEnvironment = required("MEATMETRICS_ENVIRONMENT")?.parse()?;
        let theme: Theme = lookup("MEATMETRICS_APP_THEME")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or_default();
        let log_level: LogLevel = lookup("MEATMETRICS_LOG_LEVEL")
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or_default();

        let defaults = FeatureFlags::default();
        let features = FeatureFlags {
            food_catalog: parse_flag(
                lookup("MEATMETRICS_FEATURE_FOOD_CATALOG").as_deref(),
                defaults.food_catalog,
            ),
            meal_tracking: parse_flag(
                lookup("MEATMETRICS_FEATURE_MEAL_TRACKING").as_deref(),
                defaults.meal_tracking,
            ),
            daily_summary: parse_flag(
                lookup("MEATMETRICS_FEATURE_DAILY_SUMMARY").as_deref(),
                defaults.daily_summary,
            ),
            goal_setting: parse_flag(
                lookup("MEATMETRICS_FEATURE_GOAL_SETTING").as_deref(),
                defaults.goal_setting,
            ),
            data_analysis: parse_flag(
                lookup("MEATMETRICS_FEATURE_DATA_ANALYSIS").as_deref(),
                defaults.data_analysis,
            ),
        };

        let config = Self {
            app_name: required("MEATMETRICS_APP_NAME")?,
            app_version: required("MEATMETRICS_APP_VERSION")?,
            environment,
            api_base_url: required("MEATMETRICS_API_BASE_URL")?,
            jwt_token_key: required("MEATMETRICS_JWT_TOKEN_KEY")?,
            jwt_refresh_key: required("MEATMETRICS_JWT_REFRESH_KEY")?,
            proxy_target: lookup("MEATMETRICS_PROXY_TARGET")
                .unwrap_or_else(|| DEFAULT_PROXY_TARGET.to_owned()),
            features,
            theme,
            default_locale: lookup("MEATMETRICS_DEFAULT_LOCALE")
                .unwrap_or_else(|| DEFAULT_LOCALE.to_owned()),
            debug_mode: parse_flag(lookup("MEATMETRICS_DEBUG_MODE").as_deref(), false),
            log_level,
        };

        debug!(
            environment = %config.environment,
            api_base_url = %config.api_base_url,
            log_level = %config.log_level,
            "Client configuration loaded"
        );
        Ok(config)
    }

    /// Running in development
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self.environment, AppEnvironment::Development)
    }

    /// Running in production
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self.environment, AppEnvironment::Production)
    }

    /// Debug mode requested
    #[must_use]
    pub const fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }
}
