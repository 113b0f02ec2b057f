// ABOUTME: Nutrition calculation service for portions and goal achievement
// ABOUTME: Per-portion scaling, net-carbs rule, and actual/goal ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Nutrition Calculator Module
//!
//! Pure functions deriving per-portion nutrition from catalog values stored per
//! 100g, and goal-achievement ratios from a daily total and a goal profile.
//! Nothing here performs I/O or touches shared state, so every function can be
//! called concurrently without coordination. Callers pass a consistent snapshot
//! of the user's goals.
//!
//! # Zero-goal policy
//!
//! A goal of `0` yields a ratio of `0` rather than an error or an
//! "undefined" marker. The ratio types carry plain `f64`, so a caller that
//! needs to tell "no goal set" apart from "nothing eaten" has to look at the
//! goal itself.

use crate::errors::{AppError, AppResult};
use crate::models::{CalculatedNutrition, NutritionGoalAchievement, NutritionalContent, NutritionalGoals};
use meatmetrics_core::constants::nutrition::REFERENCE_PORTION_G;

/// Calculate nutrition for a portion of `amount_g` grams
///
/// Formula: `value * amount_g / 100` for calories, protein, and fat.
///
/// Net carbs are recomputed from the scaled carbohydrates and fiber rather
/// than scaling the stored net-carbs value, so a food whose fiber exceeds its
/// carbohydrates never produces negative net carbs for any portion.
///
/// # Errors
///
/// Returns `InvalidInput` if `amount_g` is not a positive finite number, or
/// is so large that a scaled value overflows
pub fn calculate_nutrition_for_amount(
    nutrition_per_100g: &NutritionalContent,
    amount_g: f64,
) -> AppResult<CalculatedNutrition> {
    if !amount_g.is_finite() || amount_g <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Amount must be greater than 0 g, got {amount_g}"
        )));
    }

    let scale = |value: f64| value * amount_g / REFERENCE_PORTION_G;

    let nutrition = CalculatedNutrition {
        calories: scale(nutrition_per_100g.calories()),
        protein_g: scale(nutrition_per_100g.protein_g()),
        fat_g: scale(nutrition_per_100g.fat_g()),
        net_carbs_g: calculate_net_carbs(
            scale(nutrition_per_100g.carbohydrates_g()),
            nutrition_per_100g.fiber_g().map(scale),
        ),
    };

    let values = [
        nutrition.calories,
        nutrition.protein_g,
        nutrition.fat_g,
        nutrition.net_carbs_g,
    ];
    if values.iter().any(|value| !value.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "Amount {amount_g} g is too large to calculate nutrition for"
        )));
    }

    Ok(nutrition)
}

/// Calculate net carbs: carbohydrates minus fiber, floored at zero
///
/// Missing fiber counts as `0`. The result is never negative.
#[must_use]
pub fn calculate_net_carbs(carbohydrates_g: f64, fiber_g: Option<f64>) -> f64 {
    (carbohydrates_g - fiber_g.unwrap_or(0.0)).max(0.0)
}

/// Calculate actual / goal for each tracked nutrient
///
/// A goal of `0` (or anything not strictly positive) yields a ratio of `0`.
#[must_use]
pub fn calculate_goal_achievement_ratio(
    actual: &CalculatedNutrition,
    goals: &NutritionalGoals,
) -> NutritionGoalAchievement {
    NutritionGoalAchievement {
        calories_ratio: ratio(actual.calories, goals.calorie_goal()),
        protein_ratio: ratio(actual.protein_g, goals.protein_goal_g()),
        fat_ratio: ratio(actual.fat_g, goals.fat_goal_g()),
        net_carbs_ratio: ratio(actual.net_carbs_g, goals.net_carbs_goal_g()),
    }
}

fn ratio(actual: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        actual / goal
    } else {
        0.0
    }
}

/// Nutrition calculation contract
///
/// Lets callers (daily summary builders, meal-record lifecycle) be tested with
/// an alternative calculator. [`StandardNutritionCalculator`] delegates to the
/// free functions in this module.
pub trait NutritionCalculationService: Send + Sync {
    /// See [`calculate_nutrition_for_amount`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `amount_g` is not positive
    fn calculate_nutrition_for_amount(
        &self,
        nutrition_per_100g: &NutritionalContent,
        amount_g: f64,
    ) -> AppResult<CalculatedNutrition>;

    /// See [`calculate_net_carbs`]
    fn calculate_net_carbs(&self, carbohydrates_g: f64, fiber_g: Option<f64>) -> f64;

    /// See [`calculate_goal_achievement_ratio`]
    fn calculate_goal_achievement_ratio(
        &self,
        actual: &CalculatedNutrition,
        goals: &NutritionalGoals,
    ) -> NutritionGoalAchievement;
}

/// Default calculator following the rules documented in this module
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNutritionCalculator;

impl NutritionCalculationService for StandardNutritionCalculator {
    fn calculate_nutrition_for_amount(
        &self,
        nutrition_per_100g: &NutritionalContent,
        amount_g: f64,
    ) -> AppResult<CalculatedNutrition> {
        calculate_nutrition_for_amount(nutrition_per_100g, amount_g)
    }

    fn calculate_net_carbs(&self, carbohydrates_g: f64, fiber_g: Option<f64>) -> f64 {
        calculate_net_carbs(carbohydrates_g, fiber_g)
    }

    fn calculate_goal_achievement_ratio(
        &self,
        actual: &CalculatedNutrition,
        goals: &NutritionalGoals,
    ) -> NutritionGoalAchievement {
        calculate_goal_achievement_ratio(actual, goals)
    }
}
