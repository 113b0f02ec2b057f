// ABOUTME: Configuration module for the MeatMetrics client
// ABOUTME: Environment-driven client settings and nutrition goal limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Configuration loaded from environment variables.

/// Configuration error types
pub mod error;
/// Client settings from `MEATMETRICS_*` variables
pub mod environment;
/// Nutrition goal limits
pub mod nutrition;

pub use environment::{AppEnvironment, ClientConfig, Feature, FeatureFlags, LogLevel, Theme};
pub use error::ConfigError;
pub use meatmetrics_core::config::{GoalLimits, NutrientRange};
pub use nutrition::NutritionConfig;
