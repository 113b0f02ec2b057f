// ABOUTME: Core value objects for the MeatMetrics domain
// ABOUTME: Re-exports identifiers, MealType, FoodCategory, Email, and Username
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! # Core Value Objects
//!
//! Leaf types with no behaviour beyond validation. Anything crossing the API
//! boundary as a string literal is modelled as a closed enum here, so an
//! unrecognised value is rejected during deserialization rather than carried
//! through as free text.

mod account;
mod food_category;
mod ids;
mod meal_type;

pub use account::{Email, Username};
pub use food_category::FoodCategory;
pub use ids::{FoodId, MealRecordId, UserId};
pub use meal_type::MealType;
