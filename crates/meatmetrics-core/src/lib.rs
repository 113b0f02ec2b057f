// ABOUTME: Core types and constants for the MeatMetrics nutrition tracker
// ABOUTME: Foundation crate with error handling, identifiers, closed enumerations, and goal limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

#![deny(unsafe_code)]

//! # `MeatMetrics` Core
//!
//! Foundation crate providing shared types and constants for the `MeatMetrics`
//! nutrition tracker. Everything here is plain data that changes rarely, so the
//! domain crate on top of it can be rebuilt independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Wire formats, reference portion size, and validation bounds
//! - **models**: Identifier newtypes and closed enumerations (`MealType`, `FoodCategory`)
//!   plus the `Email`/`Username` account value objects
//! - **config**: Goal limit types enforced by the goal-update operation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core value objects (identifiers, meal types, food categories, account values)
pub mod models;

/// Nutrition goal limit types
pub mod config;
