// ABOUTME: Portion and net-carbs commands for meatmetrics-cli
// ABOUTME: Renders calculation results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use meatmetrics::api::NutritionValues;
use meatmetrics::errors::{AppError, AppResult};
use meatmetrics::intelligence::{calculate_net_carbs, calculate_nutrition_for_amount};
use meatmetrics::models::NutritionalContent;
use serde_json::json;

/// Nutrition of `amount` grams of a food described per 100 g
pub fn portion(
    calories: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    fiber: Option<f64>,
    amount: f64,
) -> AppResult<String> {
    let content = NutritionalContent::new(calories, protein, fat, carbs, fiber)?;
    let nutrition = calculate_nutrition_for_amount(&content, amount)?;
    let wire = NutritionValues::from(nutrition);
    Ok(serde_json::to_string_pretty(&json!({
        "amount_g": amount,
        "calculated_nutrition": wire,
    }))?)
}

/// Net carbs of a carbohydrate/fiber pair
pub fn net_carbs(carbs: f64, fiber: Option<f64>) -> AppResult<String> {
    if !carbs.is_finite() || carbs < 0.0 {
        return Err(AppError::invalid_input(format!(
            "Carbohydrates must be a non-negative number, got {carbs}"
        )));
    }
    if let Some(fiber) = fiber.filter(|f| !f.is_finite() || *f < 0.0) {
        return Err(AppError::invalid_input(format!(
            "Fiber must be a non-negative number, got {fiber}"
        )));
    }
    Ok(serde_json::to_string_pretty(&json!({
        "net_carbs": calculate_net_carbs(carbs, fiber),
    }))?)
}
