// ABOUTME: Catalog food entity
// ABOUTME: Food with category, tags, and per-100g nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::nutrition::NutritionalContent;
use meatmetrics_core::models::{FoodCategory, FoodId};
use serde::Serialize;

/// A food from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Food {
    /// Catalog identifier
    pub id: FoodId,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: FoodCategory,
    /// Free-form search tags
    pub tags: Vec<String>,
    /// Nutrition per 100g
    pub nutrition_per_100g: NutritionalContent,
}

impl Food {
    /// Whether the food carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
