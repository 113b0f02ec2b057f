// ABOUTME: Daily nutrition summary read-model built from a user's meal records
// ABOUTME: Per-meal-type breakdown, daily total, and goal achievement for one calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! Daily Summary Module
//!
//! Recomputes a [`DailyNutritionSummary`] on demand from the meal records of
//! one (user, date) pair. The summary is a transient read-model and never the
//! system of record; building it twice from the same records yields the same
//! value.

use super::nutrition_calculator::{NutritionCalculationService, StandardNutritionCalculator};
use crate::meal_records::MealRecord;
use crate::models::{
    CalculatedNutrition, MealType, NutritionGoalAchievement, NutritionalGoals, UserId,
};
use crate::specifications::{
    MealRecordSpecification, SameDayMealRecordSpecification, UserMealRecordSpecification,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Nutrition per meal slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealBreakdown {
    /// Breakfast total
    pub breakfast: CalculatedNutrition,
    /// Lunch total
    pub lunch: CalculatedNutrition,
    /// Dinner total
    pub dinner: CalculatedNutrition,
    /// Snack total
    pub snack: CalculatedNutrition,
}

impl MealBreakdown {
    /// Total for one meal slot
    #[must_use]
    pub const fn get(&self, meal_type: MealType) -> &CalculatedNutrition {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    fn get_mut(&mut self, meal_type: MealType) -> &mut CalculatedNutrition {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Field-wise sum of all four slots
    #[must_use]
    pub fn total(&self) -> CalculatedNutrition {
        MealType::ALL.iter().map(|meal_type| self.get(*meal_type)).sum()
    }
}

/// Nutrition eaten by one user on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyNutritionSummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Owner of the summarized records
    pub user_id: UserId,
    /// Sum of `meal_breakdown`
    pub total_nutrition: CalculatedNutrition,
    /// `total_nutrition` relative to the user's goals
    pub goal_achievement: NutritionGoalAchievement,
    /// Totals per meal slot
    pub meal_breakdown: MealBreakdown,
}

/// Builds [`DailyNutritionSummary`] values for one (user, date) pair
#[derive(Debug, Clone, Copy)]
pub struct DailySummaryBuilder<C = StandardNutritionCalculator> {
    user_id: UserId,
    date: NaiveDate,
    calculator: C,
}

impl DailySummaryBuilder<StandardNutritionCalculator> {
    /// Builder using the standard calculator
    #[must_use]
    pub const fn new(user_id: UserId, date: NaiveDate) -> Self {
        Self {
            user_id,
            date,
            calculator: StandardNutritionCalculator,
        }
    }
}

impl<C: NutritionCalculationService> DailySummaryBuilder<C> {
    /// Replace the calculator used for goal achievement
    #[must_use]
    pub fn with_calculator<D: NutritionCalculationService>(
        self,
        calculator: D,
    ) -> DailySummaryBuilder<D> {
        DailySummaryBuilder {
            user_id: self.user_id,
            date: self.date,
            calculator,
        }
    }

    /// Summarize `records` against `goals`
    ///
    /// Records belonging to another user or another date are skipped, so the
    /// caller may pass a wider set than strictly needed. With no matching
    /// records every total and ratio is zero.
    #[must_use]
    pub fn build(&self, records: &[MealRecord], goals: &NutritionalGoals) -> DailyNutritionSummary {
        let selection = UserMealRecordSpecification::new(self.user_id)
            .and(SameDayMealRecordSpecification::new(self.date));

        let mut meal_breakdown = MealBreakdown::default();
        let mut included = 0_usize;
        for record in records.iter().filter(|r| selection.is_satisfied_by(r)) {
            *meal_breakdown.get_mut(record.meal_type) += *record.calculated_nutrition();
            included += 1;
        }

        let skipped = records.len() - included;
        if skipped > 0 {
            debug!(
                user.id = %self.user_id,
                date = %self.date,
                skipped,
                "Ignored meal records outside the requested user/date"
            );
        }

        let total_nutrition = meal_breakdown.total();
        let goal_achievement = self
            .calculator
            .calculate_goal_achievement_ratio(&total_nutrition, goals);

        DailyNutritionSummary {
            date: self.date,
            user_id: self.user_id,
            total_nutrition,
            goal_achievement,
            meal_breakdown,
        }
    }
}

/// Summarize one user's records for `date` with the standard calculator
#[must_use]
pub fn build_daily_summary(
    user_id: UserId,
    date: NaiveDate,
    records: &[MealRecord],
    goals: &NutritionalGoals,
) -> DailyNutritionSummary {
    DailySummaryBuilder::new(user_id, date).build(records, goals)
}
