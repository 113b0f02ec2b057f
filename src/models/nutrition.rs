// ABOUTME: Nutrition value objects for foods, portions, and daily goals
// ABOUTME: NutritionalContent, CalculatedNutrition, NutritionalGoals, NutritionGoalAchievement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_calculator::calculate_net_carbs;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

fn ensure_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}

/// Nutrition of a food per 100g, as stored in the catalog
///
/// `net_carbs_g` is always derived from carbohydrates and fiber, so the type
/// has no public field access and no `Deserialize`; build it with
/// [`NutritionalContent::new`] or map it from the API payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionalContent {
    calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbohydrates_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    fiber_g: Option<f64>,
    net_carbs_g: f64,
}

impl NutritionalContent {
    /// Build per-100g nutrition, deriving net carbs
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any value is negative or not finite
    pub fn new(
        calories: f64,
        protein_g: f64,
        fat_g: f64,
        carbohydrates_g: f64,
        fiber_g: Option<f64>,
    ) -> AppResult<Self> {
        ensure_non_negative("calories", calories)?;
        ensure_non_negative("protein_g", protein_g)?;
        ensure_non_negative("fat_g", fat_g)?;
        ensure_non_negative("carbohydrates_g", carbohydrates_g)?;
        if let Some(fiber) = fiber_g {
            ensure_non_negative("fiber_g", fiber)?;
        }

        Ok(Self {
            calories,
            protein_g,
            fat_g,
            carbohydrates_g,
            fiber_g,
            net_carbs_g: calculate_net_carbs(carbohydrates_g, fiber_g),
        })
    }

    /// Energy (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Protein (g)
    #[must_use]
    pub const fn protein_g(&self) -> f64 {
        self.protein_g
    }

    /// Fat (g)
    #[must_use]
    pub const fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Total carbohydrates (g)
    #[must_use]
    pub const fn carbohydrates_g(&self) -> f64 {
        self.carbohydrates_g
    }

    /// Dietary fiber (g), when the catalog knows it
    #[must_use]
    pub const fn fiber_g(&self) -> Option<f64> {
        self.fiber_g
    }

    /// Carbohydrates minus fiber, floored at zero (g)
    #[must_use]
    pub const fn net_carbs_g(&self) -> f64 {
        self.net_carbs_g
    }
}

/// Nutrition of a portion, or a field-wise sum of portions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedNutrition {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Net carbs (g)
    pub net_carbs_g: f64,
}

impl CalculatedNutrition {
    /// All-zero nutrition
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein_g: 0.0,
            fat_g: 0.0,
            net_carbs_g: 0.0,
        }
    }
}

impl Add for CalculatedNutrition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            net_carbs_g: self.net_carbs_g + rhs.net_carbs_g,
        }
    }
}

impl AddAssign for CalculatedNutrition {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for CalculatedNutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for CalculatedNutrition {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A user's daily nutrition targets
///
/// Only non-negativity is enforced here; the tighter per-nutrient limits
/// apply when goals are changed through [`crate::models::User::update_goals`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionalGoals {
    calorie_goal: f64,
    protein_goal_g: f64,
    fat_goal_g: f64,
    net_carbs_goal_g: f64,
}

impl NutritionalGoals {
    /// Build a goal profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any goal is negative or not finite
    pub fn new(
        calorie_goal: f64,
        protein_goal_g: f64,
        fat_goal_g: f64,
        net_carbs_goal_g: f64,
    ) -> AppResult<Self> {
        ensure_non_negative("calorie_goal", calorie_goal)?;
        ensure_non_negative("protein_goal_g", protein_goal_g)?;
        ensure_non_negative("fat_goal_g", fat_goal_g)?;
        ensure_non_negative("net_carbs_goal_g", net_carbs_goal_g)?;
        Ok(Self {
            calorie_goal,
            protein_goal_g,
            fat_goal_g,
            net_carbs_goal_g,
        })
    }

    /// Daily calorie goal (kcal)
    #[must_use]
    pub const fn calorie_goal(&self) -> f64 {
        self.calorie_goal
    }

    /// Daily protein goal (g)
    #[must_use]
    pub const fn protein_goal_g(&self) -> f64 {
        self.protein_goal_g
    }

    /// Daily fat goal (g)
    #[must_use]
    pub const fn fat_goal_g(&self) -> f64 {
        self.fat_goal_g
    }

    /// Daily net carbs goal (g)
    #[must_use]
    pub const fn net_carbs_goal_g(&self) -> f64 {
        self.net_carbs_goal_g
    }
}

/// Actual / goal ratio for each tracked nutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoalAchievement {
    /// Calories actual / goal
    pub calories_ratio: f64,
    /// Protein actual / goal
    pub protein_ratio: f64,
    /// Fat actual / goal
    pub fat_ratio: f64,
    /// Net carbs actual / goal
    pub net_carbs_ratio: f64,
}
