// ABOUTME: Domain models for the MeatMetrics nutrition tracker
// ABOUTME: Re-exports nutrition records, the Food entity, and the User aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! # Domain Models
//!
//! Typed domain objects the UI consumes once raw API payloads have been mapped
//! (see [`crate::api`]). Identifiers and closed enumerations live in
//! `meatmetrics-core` and are re-exported here for convenience.
//!
//! ## Core Models
//!
//! - `NutritionalContent`: per-100g nutrition of a food
//! - `CalculatedNutrition`: nutrition of one portion or of a sum of portions
//! - `NutritionalGoals`: a user's daily targets
//! - `NutritionGoalAchievement`: actual / goal ratios
//! - `Food`: catalog entry
//! - `User`: aggregate owning the goals

mod food;
mod nutrition;
mod user;

pub use food::Food;
pub use nutrition::{
    CalculatedNutrition, NutritionGoalAchievement, NutritionalContent, NutritionalGoals,
};
pub use user::{GoalsUpdate, User};

pub use meatmetrics_core::models::{
    Email, FoodCategory, FoodId, MealRecordId, MealType, UserId, Username,
};
