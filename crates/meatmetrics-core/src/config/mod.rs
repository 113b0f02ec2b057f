// ABOUTME: Nutrition goal limit types shared by configuration loading and the user aggregate
// ABOUTME: NutrientRange and GoalLimits with default bounds for each tracked nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::constants::goal_limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Inclusive range of acceptable values for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl NutrientRange {
    /// Create a new range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    /// Check `value` against the range, naming `field` on failure
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the value is outside the range or not finite
    pub fn check(&self, field: &str, value: f64) -> AppResult<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(AppError::value_out_of_range(
                field, value, self.min, self.max,
            ))
        }
    }

    /// A range is well formed when both bounds are finite, non-negative, and ordered
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

/// Bounds enforced when a user updates their nutritional goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalLimits {
    /// Daily calorie goal bounds (kcal)
    pub calories: NutrientRange,
    /// Daily protein goal bounds (g)
    pub protein_g: NutrientRange,
    /// Daily fat goal bounds (g)
    pub fat_g: NutrientRange,
    /// Daily net carbs goal bounds (g)
    pub net_carbs_g: NutrientRange,
}

impl Default for GoalLimits {
    fn default() -> Self {
        Self {
            calories: NutrientRange::new(goal_limits::CALORIE_MIN, goal_limits::CALORIE_MAX),
            protein_g: NutrientRange::new(goal_limits::PROTEIN_MIN_G, goal_limits::PROTEIN_MAX_G),
            fat_g: NutrientRange::new(goal_limits::FAT_MIN_G, goal_limits::FAT_MAX_G),
            net_carbs_g: NutrientRange::new(
                goal_limits::NET_CARBS_MIN_G,
                goal_limits::NET_CARBS_MAX_G,
            ),
        }
    }
}
