// ABOUTME: Tests for the user aggregate's goal updates and account value objects
// ABOUTME: Covers range checks per goal, partial and empty updates, and email/username parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meatmetrics::config::{GoalLimits, NutrientRange, NutritionConfig};
use meatmetrics::errors::ErrorCode;
use meatmetrics::models::{Email, GoalsUpdate, User, UserId, Username};

mod common;

use common::{approx_eq, goals, ts};

fn user() -> User {
    User::new(
        UserId::new(1),
        Email::parse("carnivore@example.com").unwrap(),
        Username::parse("carnivore").unwrap(),
        goals(2000.0, 150.0, 120.0, 20.0),
        ts("2025-01-01 09:00:00"),
        ts("2025-01-01 09:00:00"),
    )
}

// ============================================================================
// GOAL UPDATES
// ============================================================================

#[test]
fn test_partial_update_keeps_other_goals() {
    common::init_test_logging();
    let mut user = user();
    let now = ts("2025-01-15 10:00:00");

    user.update_goals(
        GoalsUpdate {
            net_carbs_goal_g: Some(30.0),
            ..GoalsUpdate::default()
        },
        &GoalLimits::default(),
        now,
    )
    .unwrap();

    assert!(approx_eq(user.goals().net_carbs_goal_g(), 30.0));
    assert!(approx_eq(user.goals().calorie_goal(), 2000.0));
    assert!(approx_eq(user.goals().protein_goal_g(), 150.0));
    assert!(approx_eq(user.goals().fat_goal_g(), 120.0));
    assert_eq!(user.updated_at, now);
    assert_eq!(user.created_at, ts("2025-01-01 09:00:00"));
}

#[test]
fn test_bounds_are_inclusive() {
    let mut user = user();

    user.update_goals(
        GoalsUpdate {
            calorie_goal: Some(800.0),
            protein_goal_g: Some(500.0),
            fat_goal_g: Some(30.0),
            net_carbs_goal_g: Some(0.0),
        },
        &GoalLimits::default(),
        ts("2025-01-15 10:00:00"),
    )
    .unwrap();

    assert!(approx_eq(user.goals().calorie_goal(), 800.0));
    assert!(approx_eq(user.goals().net_carbs_goal_g(), 0.0));
}

#[test]
fn test_out_of_range_goal_names_the_field() {
    let cases = [
        (
            GoalsUpdate {
                calorie_goal: Some(799.0),
                ..GoalsUpdate::default()
            },
            "calorie_goal",
        ),
        (
            GoalsUpdate {
                protein_goal_g: Some(501.0),
                ..GoalsUpdate::default()
            },
            "protein_goal_g",
        ),
        (
            GoalsUpdate {
                fat_goal_g: Some(10.0),
                ..GoalsUpdate::default()
            },
            "fat_goal_g",
        ),
        (
            GoalsUpdate {
                net_carbs_goal_g: Some(151.0),
                ..GoalsUpdate::default()
            },
            "net_carbs_goal_g",
        ),
    ];

    for (update, field) in cases {
        let mut user = user();
        let before = user.clone();

        let error = user
            .update_goals(update, &GoalLimits::default(), ts("2025-01-15 10:00:00"))
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains(field), "{}", error.message);
        assert_eq!(user, before);
    }
}

#[test]
fn test_one_bad_goal_rejects_the_whole_update() {
    let mut user = user();

    let result = user.update_goals(
        GoalsUpdate {
            calorie_goal: Some(1800.0),
            fat_goal_g: Some(1000.0),
            ..GoalsUpdate::default()
        },
        &GoalLimits::default(),
        ts("2025-01-15 10:00:00"),
    );

    assert!(result.is_err());
    assert!(approx_eq(user.goals().calorie_goal(), 2000.0));
}

#[test]
fn test_empty_update_is_rejected() {
    let mut user = user();

    let error = user
        .update_goals(
            GoalsUpdate::default(),
            &GoalLimits::default(),
            ts("2025-01-15 10:00:00"),
        )
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(user.updated_at, ts("2025-01-01 09:00:00"));
}

#[test]
fn test_custom_limits_are_honoured() {
    let mut user = user();
    let strict = GoalLimits {
        net_carbs_g: NutrientRange::new(0.0, 25.0),
        ..GoalLimits::default()
    };

    let error = user
        .update_goals(
            GoalsUpdate {
                net_carbs_goal_g: Some(30.0),
                ..GoalsUpdate::default()
            },
            &strict,
            ts("2025-01-15 10:00:00"),
        )
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_non_finite_goal_is_rejected() {
    let mut user = user();

    let result = user.update_goals(
        GoalsUpdate {
            protein_goal_g: Some(f64::NAN),
            ..GoalsUpdate::default()
        },
        &GoalLimits::default(),
        ts("2025-01-15 10:00:00"),
    );

    assert_eq!(result.unwrap_err().code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_configured_limits_apply_to_goal_updates() {
    let mut user = user();

    let error = user
        .update_goals_with_configured_limits(
            GoalsUpdate {
                calorie_goal: Some(799.0),
                ..GoalsUpdate::default()
            },
            ts("2025-01-15 10:00:00"),
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(approx_eq(user.goals().calorie_goal(), 2000.0));

    user.update_goals_with_configured_limits(
        GoalsUpdate {
            calorie_goal: Some(1800.0),
            ..GoalsUpdate::default()
        },
        ts("2025-01-15 10:00:00"),
    )
    .unwrap();
    assert!(approx_eq(user.goals().calorie_goal(), 1800.0));
    assert_eq!(
        NutritionConfig::global().goal_limits,
        NutritionConfig::default().goal_limits
    );
}

// ============================================================================
// ACCOUNT VALUES
// ============================================================================

#[test]
fn test_email_is_trimmed_and_lowercased() {
    let email = Email::parse("  Steak@Example.COM ").unwrap();
    assert_eq!(email.as_str(), "steak@example.com");

    for raw in ["", "   ", "steak", "steak@", "@example.com", "steak@example"] {
        assert_eq!(Email::parse(raw).unwrap_err().code, ErrorCode::InvalidInput, "{raw}");
    }
}

#[test]
fn test_username_length_and_charset() {
    assert_eq!(Username::parse(" low_carb-99 ").unwrap().as_str(), "low_carb-99");
    assert!(Username::parse("abc").is_ok());
    assert!(Username::parse(&"a".repeat(30)).is_ok());

    assert!(Username::parse("ab").is_err());
    assert!(Username::parse(&"a".repeat(31)).is_err());
    assert!(Username::parse("meat lover").is_err());
    assert!(Username::parse("肉好き").is_err());
}

#[test]
fn test_email_deserialization_validates() {
    let email: Email = serde_json::from_str("\"Grill@Example.com\"").unwrap();
    assert_eq!(email.to_string(), "grill@example.com");

    assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
}
