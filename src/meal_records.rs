// ABOUTME: Meal record entity and its lifecycle (proposed, recorded, amended, deleted)
// ABOUTME: Create/amend/delete operations that keep nutrition consistent and emit domain events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! # Meal Records
//!
//! A meal starts as a [`MealRecordDraft`] built on the client (*Proposed*).
//! Once the backend assigns an identifier it becomes a [`MealRecord`]
//! (*Recorded*); [`MealRecord::amend`] moves it to *Amended* and
//! [`MealRecord::delete`] consumes it (*Deleted*, terminal).
//!
//! `amount_g` and `calculated_nutrition` only change together, through these
//! operations, so a record's nutrition always equals the portion computed from
//! its food at the time of the last create or amend.

use crate::api::wire_format;
use crate::errors::{AppError, AppResult};
use crate::events::{EventMetadata, MealRecordCreated, MealRecordDeleted, MealRecordUpdated};
use crate::intelligence::nutrition_calculator::calculate_nutrition_for_amount;
use crate::models::{CalculatedNutrition, Food, FoodId, MealRecordId, MealType, UserId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A meal the user is about to record (*Proposed*)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecordDraft {
    /// Owner of the record
    pub user_id: UserId,
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

/// Fields that may change when amending a record; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecordChanges {
    /// New portion size (g)
    pub amount_g: Option<f64>,
    /// New meal slot
    pub meal_type: Option<MealType>,
    /// New meal time
    #[serde(default, with = "wire_format::optional_timestamp")]
    pub recorded_at: Option<NaiveDateTime>,
}

impl MealRecordChanges {
    /// Whether nothing would change
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount_g.is_none() && self.meal_type.is_none() && self.recorded_at.is_none()
    }
}

/// A recorded meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    /// Record identifier assigned by the backend
    pub id: MealRecordId,
    /// Owner of the record
    pub user_id: UserId,
    /// Food eaten (referenced, not owned)
    pub food_id: FoodId,
    /// Food name at the time of recording
    pub food_name: String,
    amount_g: f64,
    /// Meal slot
    pub meal_type: MealType,
    /// When the meal was eaten
    #[serde(serialize_with = "wire_format::timestamp::serialize")]
    pub recorded_at: NaiveDateTime,
    calculated_nutrition: CalculatedNutrition,
    /// When the record was created
    #[serde(serialize_with = "wire_format::timestamp::serialize")]
    pub created_at: NaiveDateTime,
    /// When the record was last amended
    #[serde(serialize_with = "wire_format::timestamp::serialize")]
    pub updated_at: NaiveDateTime,
}

fn ensure_positive_amount(amount_g: f64) -> AppResult<()> {
    if amount_g.is_finite() && amount_g > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Amount must be greater than 0 g, got {amount_g}"
        )))
    }
}

fn ensure_same_food(expected: FoodId, food: &Food) -> AppResult<()> {
    if food.id == expected {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Food {} does not match the record's food {expected}",
            food.id
        )))
    }
}

impl MealRecord {
    /// Record a proposed meal (*Proposed* -> *Recorded*)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the amount is not positive or `food` is not
    /// the draft's food
    pub fn create(
        id: MealRecordId,
        draft: MealRecordDraft,
        food: &Food,
        now: NaiveDateTime,
    ) -> AppResult<(Self, MealRecordCreated)> {
        ensure_positive_amount(draft.amount_g)?;
        ensure_same_food(draft.food_id, food)?;

        let calculated_nutrition =
            calculate_nutrition_for_amount(&food.nutrition_per_100g, draft.amount_g)?;

        let record = Self {
            id,
            user_id: draft.user_id,
            food_id: draft.food_id,
            food_name: food.name.clone(),
            amount_g: draft.amount_g,
            meal_type: draft.meal_type,
            recorded_at: draft.recorded_at,
            calculated_nutrition,
            created_at: now,
            updated_at: now,
        };

        debug!(
            meal_record.id = %record.id,
            user.id = %record.user_id,
            food.id = %record.food_id,
            amount_g = record.amount_g,
            meal_type = %record.meal_type,
            "Meal record created"
        );

        let event = MealRecordCreated {
            metadata: EventMetadata::new(),
            meal_record: record.clone(),
        };
        Ok((record, event))
    }

    /// Rebuild a record from values the backend already holds
    ///
    /// The backend is the system of record, so its stored nutrition is taken
    /// as-is rather than recomputed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the stored amount is not positive
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: MealRecordId,
        user_id: UserId,
        food_id: FoodId,
        food_name: String,
        amount_g: f64,
        meal_type: MealType,
        recorded_at: NaiveDateTime,
        calculated_nutrition: CalculatedNutrition,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> AppResult<Self> {
        ensure_positive_amount(amount_g)?;
        Ok(Self {
            id,
            user_id,
            food_id,
            food_name,
            amount_g,
            meal_type,
            recorded_at,
            calculated_nutrition,
            created_at,
            updated_at,
        })
    }

    /// Portion size (g)
    #[must_use]
    pub const fn amount_g(&self) -> f64 {
        self.amount_g
    }

    /// Nutrition of the portion
    #[must_use]
    pub const fn calculated_nutrition(&self) -> &CalculatedNutrition {
        &self.calculated_nutrition
    }

    /// Calendar date the meal was eaten on
    #[must_use]
    pub fn recorded_date(&self) -> NaiveDate {
        self.recorded_at.date()
    }

    /// Amend the record (*Recorded*/*Amended* -> *Amended*)
    ///
    /// Nutrition is recomputed only when the amount actually changes; otherwise
    /// the stored nutrition is kept even if `food` now lists different values.
    /// The returned event carries the amount held before the amendment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `changes` is empty, a new amount is not
    /// positive, or `food` is not the record's food. The record is left
    /// untouched on error.
    pub fn amend(
        &mut self,
        changes: MealRecordChanges,
        food: &Food,
        now: NaiveDateTime,
    ) -> AppResult<MealRecordUpdated> {
        if changes.is_empty() {
            return Err(AppError::invalid_input(
                "Meal record update contains no changes",
            ));
        }
        ensure_same_food(self.food_id, food)?;

        let previous_amount_g = self.amount_g;
        let recalculated = match changes.amount_g {
            Some(amount_g) if amount_g.to_bits() != previous_amount_g.to_bits() => {
                ensure_positive_amount(amount_g)?;
                Some((
                    amount_g,
                    calculate_nutrition_for_amount(&food.nutrition_per_100g, amount_g)?,
                ))
            }
            Some(amount_g) => {
                ensure_positive_amount(amount_g)?;
                None
            }
            None => None,
        };

        if let Some((amount_g, nutrition)) = recalculated {
            self.amount_g = amount_g;
            self.calculated_nutrition = nutrition;
        }
        if let Some(meal_type) = changes.meal_type {
            self.meal_type = meal_type;
        }
        if let Some(recorded_at) = changes.recorded_at {
            self.recorded_at = recorded_at;
        }
        self.updated_at = now;

        debug!(
            meal_record.id = %self.id,
            user.id = %self.user_id,
            previous_amount_g,
            amount_g = self.amount_g,
            "Meal record amended"
        );

        Ok(MealRecordUpdated {
            metadata: EventMetadata::new(),
            meal_record: self.clone(),
            previous_amount_g,
        })
    }

    /// Delete the record (terminal)
    #[must_use]
    pub fn delete(self) -> MealRecordDeleted {
        debug!(
            meal_record.id = %self.id,
            user.id = %self.user_id,
            "Meal record deleted"
        );

        MealRecordDeleted {
            metadata: EventMetadata::new(),
            meal_record_id: self.id,
            user_id: self.user_id,
            recorded_date: self.recorded_date(),
        }
    }
}
