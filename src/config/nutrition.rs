// ABOUTME: Nutrition configuration holding the goal limits used by goal updates
// ABOUTME: Defaults with MEATMETRICS_GOAL_* environment overrides and a cached global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::error::ConfigError;
use meatmetrics_core::config::{GoalLimits, NutrientRange};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Bounds for each nutritional goal
    pub goal_limits: GoalLimits,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the resulting limits are invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configured limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` naming the first malformed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.goal_limits;
        let ranges: [(&'static str, &NutrientRange); 4] = [
            ("calorie goal limits", &limits.calories),
            ("protein goal limits", &limits.protein_g),
            ("fat goal limits", &limits.fat_g),
            ("net carbs goal limits", &limits.net_carbs_g),
        ];
        for (name, range) in ranges {
            if !range.is_well_formed() {
                return Err(ConfigError::InvalidRange(name));
            }
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let limits = &mut self.goal_limits;
        Self::apply_env_var("MEATMETRICS_GOAL_CALORIE_MIN", &mut limits.calories.min)?;
        Self::apply_env_var("MEATMETRICS_GOAL_CALORIE_MAX", &mut limits.calories.max)?;
        Self::apply_env_var("MEATMETRICS_GOAL_PROTEIN_MIN", &mut limits.protein_g.min)?;
        Self::apply_env_var("MEATMETRICS_GOAL_PROTEIN_MAX", &mut limits.protein_g.max)?;
        Self::apply_env_var("MEATMETRICS_GOAL_FAT_MIN", &mut limits.fat_g.min)?;
        Self::apply_env_var("MEATMETRICS_GOAL_FAT_MAX", &mut limits.fat_g.max)?;
        Self::apply_env_var("MEATMETRICS_GOAL_NET_CARBS_MIN", &mut limits.net_carbs_g.min)?;
        Self::apply_env_var("MEATMETRICS_GOAL_NET_CARBS_MAX", &mut limits.net_carbs_g.max)?;
        Ok(self)
    }
}
