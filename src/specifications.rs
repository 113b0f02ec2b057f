// ABOUTME: Predicates selecting meal records for aggregation
// ABOUTME: MealRecordSpecification with same-day, same-user, and conjunction forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use crate::meal_records::MealRecord;
use crate::models::UserId;
use chrono::NaiveDate;

/// A predicate over meal records
pub trait MealRecordSpecification {
    /// Whether `meal_record` satisfies the predicate
    fn is_satisfied_by(&self, meal_record: &MealRecord) -> bool;

    /// Both predicates must hold
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: MealRecordSpecification,
    {
        AndSpecification {
            left: self,
            right: other,
        }
    }
}

/// Records eaten on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameDayMealRecordSpecification {
    target_date: NaiveDate,
}

impl SameDayMealRecordSpecification {
    /// Match records whose `recorded_at` falls on `target_date`
    #[must_use]
    pub const fn new(target_date: NaiveDate) -> Self {
        Self { target_date }
    }
}

impl MealRecordSpecification for SameDayMealRecordSpecification {
    fn is_satisfied_by(&self, meal_record: &MealRecord) -> bool {
        meal_record.recorded_date() == self.target_date
    }
}

/// Records owned by one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMealRecordSpecification {
    user_id: UserId,
}

impl UserMealRecordSpecification {
    /// Match records owned by `user_id`
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl MealRecordSpecification for UserMealRecordSpecification {
    fn is_satisfied_by(&self, meal_record: &MealRecord) -> bool {
        meal_record.user_id == self.user_id
    }
}

/// Conjunction of two specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> MealRecordSpecification for AndSpecification<L, R>
where
    L: MealRecordSpecification,
    R: MealRecordSpecification,
{
    fn is_satisfied_by(&self, meal_record: &MealRecord) -> bool {
        self.left.is_satisfied_by(meal_record) && self.right.is_satisfied_by(meal_record)
    }
}
