// ABOUTME: Wire contracts of the MeatMetrics backend API
// ABOUTME: Request/response DTOs, the response envelope, and wire <-> domain mappings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! # Backend API Contracts
//!
//! Every payload the client exchanges with the backend, field-for-field as it
//! appears on the wire. Conversions into domain types validate on the way in:
//! unknown meal types or categories, malformed timestamps, and negative
//! nutrient values are rejected instead of coerced.

/// Authentication payloads
pub mod auth;
/// Response envelope, error codes, and pagination
pub mod envelope;
/// Food catalog payloads
pub mod foods;
/// Health check payload
pub mod health;
/// Meal record payloads
pub mod meal_records;
/// Shared nutrition payloads
pub mod nutrition;
/// Daily summary payloads
pub mod summary;
/// User payloads
pub mod users;
/// Date and timestamp wire formats
pub mod wire_format;

pub use auth::{
    AuthLoginRequest, AuthLoginResponse, AuthRefreshResponse, AuthRegisterRequest,
    AuthRegisterResponse,
};
pub use envelope::{
    ApiEnvelope, ApiErrorCode, ApiErrorResponse, Paginated, PaginationParams, PaginationResponse,
};
pub use foods::{FoodApiResponse, FoodSearchParams};
pub use health::HealthResponse;
pub use meal_records::{
    parse_meal_record_list, read_meal_record_list, MealRecordApiResponse, MealRecordListParams,
    MealRecordRequest, MealRecordUpdateRequest,
};
pub use nutrition::{NutritionPer100g, NutritionValues};
pub use summary::{DailySummaryParams, DailySummaryResponse, MealBreakdownValues};
pub use users::{UserGoalsDto, UserGoalsUpdateRequest, UserPasswordChangeRequest};
