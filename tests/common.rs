// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, timestamp helpers, foods, goals, and meal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `meatmetrics`

use chrono::{NaiveDate, NaiveDateTime};
use meatmetrics::meal_records::{MealRecord, MealRecordDraft};
use meatmetrics::models::{
    Food, FoodCategory, FoodId, MealRecordId, MealType, NutritionalContent, NutritionalGoals,
    UserId,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < EPSILON
}

/// `YYYY-MM-DD HH:mm:ss`
pub fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// `YYYY-MM-DD`
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn food(id: i64, name: &str, nutrition: NutritionalContent) -> Food {
    Food {
        id: FoodId::new(id),
        name: name.to_owned(),
        category: FoodCategory::Meat,
        tags: vec!["low-carb".to_owned()],
        nutrition_per_100g: nutrition,
    }
}

/// 250 kcal, 26 g protein, 17 g fat, no carbs per 100 g
pub fn beef_sirloin() -> Food {
    food(
        1,
        "Beef sirloin",
        NutritionalContent::new(250.0, 26.0, 17.0, 0.0, Some(0.0)).unwrap(),
    )
}

/// 150 kcal, 2 g protein, 10 g fat, 12 g carbs, 5 g fiber per 100 g
pub fn avocado() -> Food {
    Food {
        id: FoodId::new(2),
        name: "Avocado".to_owned(),
        category: FoodCategory::Vegetables,
        tags: vec![],
        nutrition_per_100g: NutritionalContent::new(150.0, 2.0, 10.0, 12.0, Some(5.0)).unwrap(),
    }
}

pub fn goals(calories: f64, protein: f64, fat: f64, net_carbs: f64) -> NutritionalGoals {
    NutritionalGoals::new(calories, protein, fat, net_carbs).unwrap()
}

pub fn draft(
    user_id: i64,
    food: &Food,
    amount_g: f64,
    meal_type: MealType,
    recorded_at: &str,
) -> MealRecordDraft {
    MealRecordDraft {
        user_id: UserId::new(user_id),
        food_id: food.id,
        amount_g,
        meal_type,
        recorded_at: ts(recorded_at),
    }
}

/// Create a recorded meal, discarding the creation event
pub fn record(
    id: i64,
    user_id: i64,
    food: &Food,
    amount_g: f64,
    meal_type: MealType,
    recorded_at: &str,
) -> MealRecord {
    let (record, _event) = MealRecord::create(
        MealRecordId::new(id),
        draft(user_id, food, amount_g, meal_type, recorded_at),
        food,
        ts(recorded_at),
    )
    .unwrap();
    record
}
