// ABOUTME: Nutrition payloads shared by the food, meal record, and summary endpoints
// ABOUTME: Per-100g catalog values and the four-nutrient totals with their domain mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::AppError;
use crate::models::{CalculatedNutrition, NutritionalContent};
use serde::{Deserialize, Serialize};

/// Catalog nutrition per 100 g as sent by the backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Total carbohydrates (g)
    pub carbohydrates: f64,
    /// Dietary fiber (g), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
}

impl TryFrom<NutritionPer100g> for NutritionalContent {
    type Error = AppError;

    fn try_from(wire: NutritionPer100g) -> Result<Self, Self::Error> {
        Self::new(
            wire.calories,
            wire.protein,
            wire.fat,
            wire.carbohydrates,
            wire.fiber,
        )
    }
}

impl From<&NutritionalContent> for NutritionPer100g {
    fn from(content: &NutritionalContent) -> Self {
        Self {
            calories: content.calories(),
            protein: content.protein_g(),
            fat: content.fat_g(),
            carbohydrates: content.carbohydrates_g(),
            fiber: content.fiber_g(),
        }
    }
}

/// Calories, protein, fat, and net carbs of a portion or a total
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Net carbohydrates (g)
    pub net_carbs: f64,
}

impl From<CalculatedNutrition> for NutritionValues {
    fn from(nutrition: CalculatedNutrition) -> Self {
        Self {
            calories: nutrition.calories,
            protein: nutrition.protein_g,
            fat: nutrition.fat_g,
            net_carbs: nutrition.net_carbs_g,
        }
    }
}

impl From<NutritionValues> for CalculatedNutrition {
    fn from(wire: NutritionValues) -> Self {
        Self {
            calories: wire.calories,
            protein_g: wire.protein,
            fat_g: wire.fat,
            net_carbs_g: wire.net_carbs,
        }
    }
}
