// ABOUTME: User aggregate owning the nutritional goal profile
// ABOUTME: User, GoalsUpdate, and the explicit goal-update operation with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::nutrition::NutritionalGoals;
use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use meatmetrics_core::config::GoalLimits;
use meatmetrics_core::models::{Email, UserId, Username};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partial change to a goal profile; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsUpdate {
    /// New daily calorie goal (kcal)
    pub calorie_goal: Option<f64>,
    /// New daily protein goal (g)
    pub protein_goal_g: Option<f64>,
    /// New daily fat goal (g)
    pub fat_goal_g: Option<f64>,
    /// New daily net carbs goal (g)
    pub net_carbs_goal_g: Option<f64>,
}

impl GoalsUpdate {
    /// Whether the update changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calorie_goal.is_none()
            && self.protein_goal_g.is_none()
            && self.fat_goal_g.is_none()
            && self.net_carbs_goal_g.is_none()
    }
}

/// A registered user and the goals they own
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Login email
    pub email: Email,
    /// Display name
    pub username: Username,
    goals: NutritionalGoals,
    /// Creation time
    pub created_at: NaiveDateTime,
    /// Last modification time
    pub updated_at: NaiveDateTime,
}

impl User {
    /// Rehydrate a user
    #[must_use]
    pub const fn new(
        id: UserId,
        email: Email,
        username: Username,
        goals: NutritionalGoals,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            email,
            username,
            goals,
            created_at,
            updated_at,
        }
    }

    /// Current goal profile
    #[must_use]
    pub const fn goals(&self) -> &NutritionalGoals {
        &self.goals
    }

    /// Apply a partial goal update against the configured goal limits
    ///
    /// The limits come from [`NutritionConfig::global`], so
    /// `MEATMETRICS_GOAL_*` overrides apply.
    ///
    /// # Errors
    ///
    /// Same as [`User::update_goals`]
    pub fn update_goals_with_configured_limits(
        &mut self,
        update: GoalsUpdate,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        self.update_goals(update, &NutritionConfig::global().goal_limits, now)
    }

    /// Apply a partial goal update
    ///
    /// Every resulting goal is checked against `limits`; the profile is only
    /// replaced when all of them pass.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty update and `ValueOutOfRange` naming
    /// the first goal outside its limits
    pub fn update_goals(
        &mut self,
        update: GoalsUpdate,
        limits: &GoalLimits,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if update.is_empty() {
            return Err(AppError::invalid_input("Goal update contains no changes"));
        }

        let current = self.goals;
        let (current_calories, current_protein, current_fat, current_net_carbs) = (
            current.calorie_goal(),
            current.protein_goal_g(),
            current.fat_goal_g(),
            current.net_carbs_goal_g(),
        );
        let calorie_goal = update.calorie_goal.unwrap_or(current_calories);
        let protein_goal_g = update.protein_goal_g.unwrap_or(current_protein);
        let fat_goal_g = update.fat_goal_g.unwrap_or(current_fat);
        let net_carbs_goal_g = update.net_carbs_goal_g.unwrap_or(current_net_carbs);

        limits.calories.check("calorie_goal", calorie_goal)?;
        limits.protein_g.check("protein_goal_g", protein_goal_g)?;
        limits.fat_g.check("fat_goal_g", fat_goal_g)?;
        limits.net_carbs_g.check("net_carbs_goal_g", net_carbs_goal_g)?;

        self.goals =
            NutritionalGoals::new(calorie_goal, protein_goal_g, fat_goal_g, net_carbs_goal_g)?;
        self.updated_at = now;

        debug!(
            user.id = %self.id,
            calorie_goal,
            protein_goal_g,
            fat_goal_g,
            net_carbs_goal_g,
            "Nutritional goals updated"
        );
        Ok(())
    }
}
