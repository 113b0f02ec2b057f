// ABOUTME: Daily summary command for meatmetrics-cli
// ABOUTME: Loads stored meal records and prints the summary in its wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

use meatmetrics::api::wire_format::parse_date;
use meatmetrics::api::{read_meal_record_list, DailySummaryResponse};
use meatmetrics::errors::AppResult;
use meatmetrics::intelligence::build_daily_summary;
use meatmetrics::models::{NutritionalGoals, UserId};
use std::path::Path;
use tracing::info;

/// Summarize the records stored at `records` for one user and date
///
/// `goals` is calories, protein, fat, net carbs in that order.
pub fn daily(records: &Path, user_id: i64, date: &str, goals: [f64; 4]) -> AppResult<String> {
    let date = parse_date(date)?;
    let user_id = UserId::new(user_id);
    let [calories, protein, fat, net_carbs] = goals;
    let goals = NutritionalGoals::new(calories, protein, fat, net_carbs)?;

    let records = read_meal_record_list(records)?;
    let summary = build_daily_summary(user_id, date, &records, &goals);
    info!(
        user.id = %user_id,
        date = %date,
        records = records.len(),
        calories = summary.total_nutrition.calories,
        "Daily summary built"
    );

    Ok(serde_json::to_string_pretty(&DailySummaryResponse::from(
        &summary,
    ))?)
}
