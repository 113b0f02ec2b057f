// ABOUTME: Daily summary payloads of the backend API
// ABOUTME: Query parameters and the summary response with mappings to and from the read-model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use super::nutrition::NutritionValues;
use super::wire_format;
use crate::intelligence::{DailyNutritionSummary, MealBreakdown};
use crate::models::{NutritionGoalAchievement, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `GET /api/summary/daily` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummaryParams {
    /// Calendar date to summarize
    #[serde(with = "wire_format::date")]
    pub date: NaiveDate,
}

/// Per-slot totals on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealBreakdownValues {
    /// Breakfast total
    pub breakfast: NutritionValues,
    /// Lunch total
    pub lunch: NutritionValues,
    /// Dinner total
    pub dinner: NutritionValues,
    /// Snack total
    pub snack: NutritionValues,
}

impl From<&MealBreakdown> for MealBreakdownValues {
    fn from(breakdown: &MealBreakdown) -> Self {
        Self {
            breakfast: breakdown.breakfast.into(),
            lunch: breakdown.lunch.into(),
            dinner: breakdown.dinner.into(),
            snack: breakdown.snack.into(),
        }
    }
}

impl From<MealBreakdownValues> for MealBreakdown {
    fn from(wire: MealBreakdownValues) -> Self {
        Self {
            breakfast: wire.breakfast.into(),
            lunch: wire.lunch.into(),
            dinner: wire.dinner.into(),
            snack: wire.snack.into(),
        }
    }
}

/// `GET /api/summary/daily` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    /// Summarized date
    #[serde(with = "wire_format::date")]
    pub date: NaiveDate,
    /// Daily total
    pub total_nutrition: NutritionValues,
    /// Total relative to goals
    pub goal_achievement: NutritionGoalAchievement,
    /// Totals per meal slot
    pub meal_breakdown: MealBreakdownValues,
}

impl From<&DailyNutritionSummary> for DailySummaryResponse {
    fn from(summary: &DailyNutritionSummary) -> Self {
        Self {
            date: summary.date,
            total_nutrition: summary.total_nutrition.into(),
            goal_achievement: summary.goal_achievement,
            meal_breakdown: (&summary.meal_breakdown).into(),
        }
    }
}

impl DailySummaryResponse {
    /// Attach the owner, which the wire form leaves implicit
    #[must_use]
    pub fn into_summary(self, user_id: UserId) -> DailyNutritionSummary {
        DailyNutritionSummary {
            date: self.date,
            user_id,
            total_nutrition: self.total_nutrition.into(),
            goal_achievement: self.goal_achievement,
            meal_breakdown: self.meal_breakdown.into(),
        }
    }
}
