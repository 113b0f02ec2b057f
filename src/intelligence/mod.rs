// ABOUTME: Nutrition intelligence for portions, goals, and daily summaries
// ABOUTME: Calculation service plus the daily summary aggregate builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Nutrition intelligence: per-portion calculation, goal achievement, and the
//! daily summary read-model.

/// Per-portion nutrition, net carbs, and goal achievement ratios
pub mod nutrition_calculator;

/// Daily summary aggregate builder
pub mod daily_summary;

pub use daily_summary::{
    build_daily_summary, DailyNutritionSummary, DailySummaryBuilder, MealBreakdown,
};
pub use nutrition_calculator::{
    calculate_goal_achievement_ratio, calculate_net_carbs, calculate_nutrition_for_amount,
    NutritionCalculationService, StandardNutritionCalculator,
};
