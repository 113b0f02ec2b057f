// ABOUTME: Main library entry point for the MeatMetrics client domain layer
// ABOUTME: Nutrition calculation, meal record lifecycle, daily summaries, and backend API contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

#![deny(unsafe_code)]

//! # MeatMetrics
//!
//! Client-side domain layer of a nutrition tracker aimed at low-carb diets.
//! Users record what they ate; the library derives per-portion nutrition,
//! aggregates a day of meals into a summary, and measures it against the
//! user's goals.
//!
//! ## Architecture
//!
//! - **Models**: nutrition values, foods, users, and goal profiles
//! - **Intelligence**: per-portion calculation and the daily summary builder
//! - **Meal records**: the record lifecycle and the events it emits
//! - **API**: wire contracts of the backend and their domain mappings
//! - **Config**: environment-driven client settings and goal limits
//!
//! ## Example Usage
//!
//! ```rust
//! use meatmetrics::errors::AppResult;
//! use meatmetrics::intelligence::calculate_nutrition_for_amount;
//! use meatmetrics::models::NutritionalContent;
//!
//! fn main() -> AppResult<()> {
//!     let beef = NutritionalContent::new(250.0, 26.0, 17.0, 0.0, Some(0.0))?;
//!     let portion = calculate_nutrition_for_amount(&beef, 150.0)?;
//!     assert!((portion.calories - 375.0).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

/// Backend API wire contracts and mappings
pub mod api;

/// Environment-driven configuration
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain events emitted by meal record mutations
pub mod events;

/// Nutrition calculation and daily summaries
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Meal record entity and lifecycle
pub mod meal_records;

/// Domain models
pub mod models;

/// Meal record selection predicates
pub mod specifications;
