// ABOUTME: User payloads of the backend API
// ABOUTME: Goal read/update DTOs and the password change request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::errors::{AppError, AppResult};
use crate::models::{GoalsUpdate, NutritionalGoals};
use serde::{Deserialize, Serialize};

/// A user's goals as exchanged with `GET /api/users/goals`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserGoalsDto {
    /// Daily calorie goal (kcal)
    pub calorie_goal: f64,
    /// Daily protein goal (g)
    pub protein_goal_g: f64,
    /// Daily fat goal (g)
    pub fat_goal_g: f64,
    /// Daily net carbs goal (g)
    pub net_carbs_goal_g: f64,
}

impl From<&NutritionalGoals> for UserGoalsDto {
    fn from(goals: &NutritionalGoals) -> Self {
        Self {
            calorie_goal: goals.calorie_goal(),
            protein_goal_g: goals.protein_goal_g(),
            fat_goal_g: goals.fat_goal_g(),
            net_carbs_goal_g: goals.net_carbs_goal_g(),
        }
    }
}

impl TryFrom<UserGoalsDto> for NutritionalGoals {
    type Error = AppError;

    fn try_from(wire: UserGoalsDto) -> Result<Self, Self::Error> {
        Self::new(
            wire.calorie_goal,
            wire.protein_goal_g,
            wire.fat_goal_g,
            wire.net_carbs_goal_g,
        )
    }
}

/// `PUT /api/users/goals` body; absent goals are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGoalsUpdateRequest {
    /// New calorie goal (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorie_goal: Option<f64>,
    /// New protein goal (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_goal_g: Option<f64>,
    /// New fat goal (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_goal_g: Option<f64>,
    /// New net carbs goal (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_carbs_goal_g: Option<f64>,
}

impl From<UserGoalsUpdateRequest> for GoalsUpdate {
    fn from(request: UserGoalsUpdateRequest) -> Self {
        Self {
            calorie_goal: request.calorie_goal,
            protein_goal_g: request.protein_goal_g,
            fat_goal_g: request.fat_goal_g,
            net_carbs_goal_g: request.net_carbs_goal_g,
        }
    }
}

impl From<GoalsUpdate> for UserGoalsUpdateRequest {
    fn from(update: GoalsUpdate) -> Self {
        Self {
            calorie_goal: update.calorie_goal,
            protein_goal_g: update.protein_goal_g,
            fat_goal_g: update.fat_goal_g,
            net_carbs_goal_g: update.net_carbs_goal_g,
        }
    }
}

/// `PUT /api/users/password` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPasswordChangeRequest {
    /// Current password
    pub current_password: String,
    /// Replacement password
    pub new_password: String,
}

impl UserPasswordChangeRequest {
    /// Build a request; the new password must differ from the current one
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty password and `InvalidInput`
    /// when both passwords are equal
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> AppResult<Self> {
        let current_password = current_password.into();
        let new_password = new_password.into();
        if current_password.is_empty() {
            return Err(AppError::missing_field("current_password"));
        }
        if new_password.is_empty() {
            return Err(AppError::missing_field("new_password"));
        }
        if current_password == new_password {
            return Err(AppError::invalid_input(
                "New password must differ from the current password",
            ));
        }
        Ok(Self {
            current_password,
            new_password,
        })
    }
}
