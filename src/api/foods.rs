// ABOUTME: Food catalog payloads of the backend API
// ABOUTME: Search parameters and the food response with its mapping onto the Food entity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::nutrition::NutritionPer100g;
use crate::errors::AppError;
use crate::models::{Food, FoodCategory, FoodId};
use serde::{Deserialize, Serialize};

/// `GET /api/foods` query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSearchParams {
    /// Free-text name filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    /// Comma-separated tag filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl FoodSearchParams {
    /// Filter by several tags at once
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.tags = (!joined.is_empty()).then_some(joined);
        self
    }
}

/// A catalog entry as returned by the food endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodApiResponse {
    /// Food identifier
    pub id: FoodId,
    /// Display name
    pub name: String,
    /// Category
    pub category: FoodCategory,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Nutrition per 100 g
    pub nutrition_per_100g: NutritionPer100g,
}

impl TryFrom<FoodApiResponse> for Food {
    type Error = AppError;

    fn try_from(wire: FoodApiResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire.id,
            name: wire.name,
            category: wire.category,
            tags: wire.tags,
            nutrition_per_100g: wire.nutrition_per_100g.try_into()?,
        })
    }
}

impl From<&Food> for FoodApiResponse {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            category: food.category,
            tags: food.tags.clone(),
            nutrition_per_100g: (&food.nutrition_per_100g).into(),
        }
    }
}
