// ABOUTME: Meal record payloads of the backend API
// ABOUTME: Create/update requests, list query, record response, and list payload parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::envelope::ApiEnvelope;
use super::nutrition::NutritionValues;
use super::wire_format;
use crate::errors::{AppError, AppResult};
use crate::meal_records::{MealRecord, MealRecordChanges, MealRecordDraft};
use crate::models::{FoodId, MealRecordId, MealType, UserId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// `POST /api/meals` body
///
/// The owner is taken from the bearer token, so the draft's user is not sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecordRequest {
    /// Food eaten
    pub food_id: FoodId,
    /// Portion size (g)
    pub amount_g: f64,
    /// Meal slot
    pub meal_type: MealType,
    /// When the meal was eaten
    #[serde(with = "wire_format::timestamp")]
    pub recorded_at: NaiveDateTime,
}

impl From<&MealRecordDraft> for MealRecordRequest {
    fn from(draft: &MealRecordDraft) -> Self {
        Self {
            food_id: draft.food_id,
            amount_g: draft.amount_g,
            meal_type: draft.meal_type,
            recorded_at: draft.recorded_at,
        }
    }
}

/// A meal record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecordApiResponse {
    /// Record identifier
    pub id: MealRecordId,
    /// Owner
    pub user_id: UserId,
    /// Food eaten
    pub food_id: FoodId,
    /// Food name at recording time
    pub food_name: String,
    /// Portion size (g)
    pub amount_g: f64,
    /// Meal slot
    pub meal_type: MealType,
    /// When the meal was eaten
    #[serde(with = "wire_format::timestamp")]
    pub recorded_at: NaiveDateTime,
    /// Creation time
    #[serde(with = "wire_format::timestamp")]
    pub created_at: NaiveDateTime,
    /// Last amendment time
    #[serde(with = "wire_format::timestamp")]
    pub updated_at: NaiveDateTime,
    /// Nutrition of the portion
    pub calculated_nutrition: NutritionValues,
}

impl TryFrom<MealRecordApiResponse> for MealRecord {
    type Error = AppError;

    fn try_from(wire: MealRecordApiResponse) -> Result<Self, Self::Error> {
        Self::restore(
            wire.id,
            wire.user_id,
            wire.food_id,
            wire.food_name,
            wire.amount_g,
            wire.meal_type,
            wire.recorded_at,
            wire.calculated_nutrition.into(),
            wire.created_at,
            wire.updated_at,
        )
    }
}

impl From<&MealRecord> for MealRecordApiResponse {
    fn from(record: &MealRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            food_id: record.food_id,
            food_name: record.food_name.clone(),
            amount_g: record.amount_g(),
            meal_type: record.meal_type,
            recorded_at: record.recorded_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
            calculated_nutrition: (*record.calculated_nutrition()).into(),
        }
    }
}

/// `PUT /api/meals/{id}` body; absent fields are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecordUpdateRequest {
    /// New portion size (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_g: Option<f64>,
    /// New meal slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// New meal time
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "wire_format::optional_timestamp"
    )]
    pub recorded_at: Option<NaiveDateTime>,
}

impl From<MealRecordChanges> for MealRecordUpdateRequest {
    fn from(changes: MealRecordChanges) -> Self {
        Self {
            amount_g: changes.amount_g,
            meal_type: changes.meal_type,
            recorded_at: changes.recorded_at,
        }
    }
}

impl From<MealRecordUpdateRequest> for MealRecordChanges {
    fn from(request: MealRecordUpdateRequest) -> Self {
        Self {
            amount_g: request.amount_g,
            meal_type: request.meal_type,
            recorded_at: request.recorded_at,
        }
    }
}

/// `GET /api/meals` query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecordListParams {
    /// Only records eaten on this date
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "wire_format::optional_date"
    )]
    pub date: Option<NaiveDate>,
    /// Only records in this meal slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl MealRecordListParams {
    /// Query for one calendar date
    #[must_use]
    pub const fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            meal_type: None,
        }
    }
}

/// A stored list of records, either bare or wrapped in the response envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MealRecordList {
    Envelope(ApiEnvelope<Vec<MealRecordApiResponse>>),
    Bare(Vec<MealRecordApiResponse>),
}

/// Parse a `GET /api/meals` payload into domain records
///
/// Accepts the enveloped response as well as a bare JSON array.
///
/// # Errors
///
/// Returns `SerializationError` for malformed JSON, the backend error for a
/// failed envelope, and `InvalidInput` for records with a non-positive amount
pub fn parse_meal_record_list(json: &str) -> AppResult<Vec<MealRecord>> {
    let wire = match serde_json::from_str::<MealRecordList>(json)? {
        MealRecordList::Envelope(envelope) => envelope.into_result()?,
        MealRecordList::Bare(records) => records,
    };
    wire.into_iter().map(MealRecord::try_from).collect()
}

/// Read a stored `GET /api/meals` payload from disk
///
/// # Errors
///
/// Returns `InternalError` if the file cannot be read, otherwise as
/// [`parse_meal_record_list`]
pub fn read_meal_record_list(path: &Path) -> AppResult<Vec<MealRecord>> {
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::internal(format!("Failed to read {}", path.display())).with_source(e)
    })?;
    let records = parse_meal_record_list(&json)?;
    debug!(path = %path.display(), count = records.len(), "Loaded meal records");
    Ok(records)
}
