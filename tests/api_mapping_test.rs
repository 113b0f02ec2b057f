// ABOUTME: Tests for backend API payloads and their domain mappings
// ABOUTME: Covers wire formats, closed enums, envelopes, and record list parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meatmetrics::api::wire_format::{format_timestamp, parse_date, parse_timestamp};
use meatmetrics::api::{
    parse_meal_record_list, read_meal_record_list, ApiEnvelope, ApiErrorCode, AuthLoginResponse,
    AuthRegisterRequest, DailySummaryResponse, FoodApiResponse, FoodSearchParams,
    HealthResponse, MealRecordApiResponse, MealRecordListParams, MealRecordRequest,
    MealRecordUpdateRequest, Paginated, UserGoalsDto, UserGoalsUpdateRequest,
    UserPasswordChangeRequest,
};
use meatmetrics::errors::ErrorCode;
use meatmetrics::intelligence::build_daily_summary;
use meatmetrics::meal_records::{MealRecord, MealRecordChanges};
use meatmetrics::models::{
    Food, FoodCategory, GoalsUpdate, MealType, NutritionalGoals, UserId,
};
use serde_json::json;
use std::io::Write;

mod common;

use common::{approx_eq, beef_sirloin, date, draft, record, ts};

fn meal_record_json(id: i64, user_id: i64, meal_type: &str, recorded_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": user_id,
        "food_id": 1,
        "food_name": "Beef sirloin",
        "amount_g": 150,
        "meal_type": meal_type,
        "recorded_at": recorded_at,
        "created_at": recorded_at,
        "updated_at": recorded_at,
        "calculated_nutrition": {
            "calories": 375.0,
            "protein": 39.0,
            "fat": 25.5,
            "net_carbs": 0.0
        }
    })
}

// ============================================================================
// WIRE FORMATS
// ============================================================================

#[test]
fn test_timestamp_round_trip_format() {
    let parsed = parse_timestamp("2025-01-15 19:00:00").unwrap();
    assert_eq!(format_timestamp(parsed), "2025-01-15 19:00:00");
}

#[test]
fn test_malformed_timestamps_are_invalid_format() {
    for raw in ["2025-01-15T19:00:00", "2025-01-15", "15/01/2025 19:00:00", ""] {
        assert_eq!(parse_timestamp(raw).unwrap_err().code, ErrorCode::InvalidFormat);
    }
    assert_eq!(parse_date("2025-13-01").unwrap_err().code, ErrorCode::InvalidFormat);
}

#[test]
fn test_meal_record_request_uses_wire_timestamp() {
    let beef = beef_sirloin();
    let request = MealRecordRequest::from(&draft(
        1,
        &beef,
        150.0,
        MealType::Dinner,
        "2025-01-15 19:00:00",
    ));

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["recorded_at"], "2025-01-15 19:00:00");
    assert_eq!(json["meal_type"], "dinner");
    assert_eq!(json["food_id"], 1);
    assert!(json.get("user_id").is_none());
}

// ============================================================================
// MEAL RECORDS
// ============================================================================

#[test]
fn test_meal_record_response_maps_to_domain() {
    let wire: MealRecordApiResponse =
        serde_json::from_value(meal_record_json(4, 1, "dinner", "2025-01-15 19:00:00")).unwrap();

    let record = MealRecord::try_from(wire).unwrap();

    assert!(approx_eq(record.amount_g(), 150.0));
    assert_eq!(record.meal_type, MealType::Dinner);
    assert_eq!(record.recorded_at, ts("2025-01-15 19:00:00"));
    assert!(approx_eq(record.calculated_nutrition().fat_g, 25.5));
}

#[test]
fn test_unknown_meal_type_is_rejected() {
    let result =
        serde_json::from_value::<MealRecordApiResponse>(meal_record_json(1, 1, "brunch", "2025-01-15 11:00:00"));
    assert!(result.is_err());

    let result = serde_json::from_value::<MealRecordApiResponse>(meal_record_json(
        1,
        1,
        "Dinner",
        "2025-01-15 19:00:00",
    ));
    assert!(result.is_err());
}

#[test]
fn test_stored_non_positive_amount_is_rejected() {
    let mut json = meal_record_json(1, 1, "lunch", "2025-01-15 12:00:00");
    json["amount_g"] = json!(0);
    let wire: MealRecordApiResponse = serde_json::from_value(json).unwrap();

    let error = MealRecord::try_from(wire).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_domain_record_round_trips_through_wire() {
    let beef = beef_sirloin();
    let original = record(3, 1, &beef, 120.0, MealType::Lunch, "2025-01-15 12:00:00");

    let wire = MealRecordApiResponse::from(&original);
    let json = serde_json::to_value(&wire).unwrap();
    assert_eq!(json["recorded_at"], "2025-01-15 12:00:00");
    let back: MealRecordApiResponse = serde_json::from_value(json).unwrap();

    assert_eq!(MealRecord::try_from(back).unwrap(), original);
}

#[test]
fn test_update_request_omits_unchanged_fields() {
    let request = MealRecordUpdateRequest::from(MealRecordChanges {
        amount_g: Some(200.0),
        ..MealRecordChanges::default()
    });

    let json = serde_json::to_value(request).unwrap();

    assert_eq!(json, json!({ "amount_g": 200.0 }));

    let parsed: MealRecordUpdateRequest =
        serde_json::from_value(json!({ "recorded_at": "2025-01-15 08:00:00" })).unwrap();
    let changes = MealRecordChanges::from(parsed);
    assert_eq!(changes.recorded_at, Some(ts("2025-01-15 08:00:00")));
    assert!(changes.amount_g.is_none());
}

#[test]
fn test_list_params_serialize_date() {
    let params = MealRecordListParams::for_date(date("2025-01-15"));
    assert_eq!(
        serde_json::to_value(params).unwrap(),
        json!({ "date": "2025-01-15" })
    );
}

#[test]
fn test_parse_bare_and_enveloped_record_lists() {
    let bare = json!([
        meal_record_json(1, 1, "breakfast", "2025-01-15 07:00:00"),
        meal_record_json(2, 1, "snack", "2025-01-15 15:00:00"),
    ]);
    let records = parse_meal_record_list(&bare.to_string()).unwrap();
    assert_eq!(records.len(), 2);

    let enveloped = json!({ "success": true, "data": bare });
    let records = parse_meal_record_list(&enveloped.to_string()).unwrap();
    assert_eq!(records.len(), 2);

    assert!(parse_meal_record_list("[]").unwrap().is_empty());
}

#[test]
fn test_failed_envelope_surfaces_backend_error() {
    let failed = json!({
        "success": false,
        "error": { "code": "UNAUTHORIZED", "message": "Token expired", "details": {} }
    });

    let error = parse_meal_record_list(&failed.to_string()).unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.details["api_code"], "UNAUTHORIZED");
}

#[test]
fn test_read_record_list_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let payload = json!([meal_record_json(1, 1, "lunch", "2025-01-15 12:00:00")]);
    file.write_all(payload.to_string().as_bytes()).unwrap();

    let records = read_meal_record_list(file.path()).unwrap();
    assert_eq!(records.len(), 1);

    let missing = read_meal_record_list(std::path::Path::new("/nonexistent/meals.json"));
    assert_eq!(missing.unwrap_err().code, ErrorCode::InternalError);
}

// ============================================================================
// ENVELOPE
// ============================================================================

#[test]
fn test_api_error_codes_map_onto_error_codes() {
    let cases = [
        (ApiErrorCode::ValidationError, ErrorCode::InvalidInput),
        (ApiErrorCode::BadRequest, ErrorCode::InvalidInput),
        (ApiErrorCode::Unauthorized, ErrorCode::AuthInvalid),
        (ApiErrorCode::NotFound, ErrorCode::ResourceNotFound),
        (ApiErrorCode::Conflict, ErrorCode::ResourceAlreadyExists),
        (ApiErrorCode::DbError, ErrorCode::ExternalServiceError),
        (ApiErrorCode::MethodNotAllowed, ErrorCode::ExternalServiceError),
        (ApiErrorCode::InternalError, ErrorCode::ExternalServiceError),
    ];
    for (api, expected) in cases {
        assert_eq!(ErrorCode::from(api), expected);
    }
    assert_eq!(
        serde_json::to_value(ApiErrorCode::MethodNotAllowed).unwrap(),
        "METHOD_NOT_ALLOWED"
    );
}

#[test]
fn test_successful_envelope_without_data_is_an_error() {
    let envelope: ApiEnvelope<AuthLoginResponse> =
        serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();

    assert_eq!(
        envelope.into_result().unwrap_err().code,
        ErrorCode::ExternalServiceError
    );
}

#[test]
fn test_paginated_envelope() {
    let payload = json!({
        "success": true,
        "data": {
            "items": [{
                "id": 1,
                "name": "Beef sirloin",
                "category": "meat",
                "tags": ["low-carb"],
                "nutrition_per_100g": { "calories": 250, "protein": 26, "fat": 17, "carbohydrates": 0 }
            }],
            "pagination": { "total": 41, "page": 1, "limit": 20, "hasNext": true }
        }
    });

    let page: Paginated<FoodApiResponse> =
        serde_json::from_value::<ApiEnvelope<_>>(payload).unwrap().into_result().unwrap();

    assert!(page.pagination.has_next);
    assert_eq!(page.items.len(), 1);
    let food = Food::try_from(page.items[0].clone()).unwrap();
    assert_eq!(food.category, FoodCategory::Meat);
    assert!(food.nutrition_per_100g.fiber_g().is_none());
    assert!(food.has_tag("low-carb"));
}

// ============================================================================
// FOODS
// ============================================================================

#[test]
fn test_unknown_food_category_is_rejected() {
    let payload = json!({
        "id": 1,
        "name": "Mystery",
        "category": "grains",
        "tags": [],
        "nutrition_per_100g": { "calories": 100, "protein": 1, "fat": 1, "carbohydrates": 20 }
    });
    assert!(serde_json::from_value::<FoodApiResponse>(payload).is_err());
}

#[test]
fn test_food_with_negative_nutrient_is_rejected() {
    let payload = json!({
        "id": 1,
        "name": "Broken",
        "category": "other",
        "tags": [],
        "nutrition_per_100g": { "calories": 100, "protein": -1, "fat": 1, "carbohydrates": 20 }
    });
    let wire: FoodApiResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(Food::try_from(wire).unwrap_err().code, ErrorCode::InvalidInput);
}

#[test]
fn test_food_search_params_join_tags() {
    let params = FoodSearchParams::default().with_tags(["low-carb", " keto ", ""]);
    assert_eq!(params.tags.as_deref(), Some("low-carb,keto"));

    let params = FoodSearchParams {
        category: Some(FoodCategory::Fish),
        ..FoodSearchParams::default()
    };
    assert_eq!(serde_json::to_value(params).unwrap(), json!({ "category": "fish" }));
}

// ============================================================================
// SUMMARY
// ============================================================================

#[test]
fn test_daily_summary_response_shape() {
    let beef = beef_sirloin();
    let records = vec![record(1, 1, &beef, 150.0, MealType::Dinner, "2025-01-15 19:00:00")];
    let goals = common::goals(2000.0, 150.0, 120.0, 20.0);
    let summary = build_daily_summary(UserId::new(1), date("2025-01-15"), &records, &goals);

    let wire = DailySummaryResponse::from(&summary);
    let json = serde_json::to_value(wire).unwrap();

    assert_eq!(json["date"], "2025-01-15");
    assert_eq!(json["total_nutrition"]["calories"], 375.0);
    assert_eq!(json["meal_breakdown"]["dinner"]["protein"], 39.0);
    assert_eq!(json["meal_breakdown"]["lunch"]["calories"], 0.0);
    assert!(json["goal_achievement"]["calories_ratio"].is_number());

    let back: DailySummaryResponse = serde_json::from_value(json).unwrap();
    assert_eq!(back.into_summary(UserId::new(1)), summary);
}

// ============================================================================
// USERS AND AUTH
// ============================================================================

#[test]
fn test_user_goals_dto_round_trip() {
    let goals = NutritionalGoals::new(2000.0, 150.0, 120.0, 20.0).unwrap();
    let dto = UserGoalsDto::from(&goals);

    assert_eq!(NutritionalGoals::try_from(dto).unwrap(), goals);

    let negative = UserGoalsDto {
        calorie_goal: -1.0,
        ..dto
    };
    assert!(NutritionalGoals::try_from(negative).is_err());
}

#[test]
fn test_goals_update_request_is_partial() {
    let request: UserGoalsUpdateRequest =
        serde_json::from_value(json!({ "net_carbs_goal_g": 25 })).unwrap();
    let update = GoalsUpdate::from(request);

    assert_eq!(update.net_carbs_goal_g, Some(25.0));
    assert!(update.calorie_goal.is_none());
    assert!(!update.is_empty());
}

#[test]
fn test_password_change_requires_a_new_password() {
    assert!(UserPasswordChangeRequest::new("old-secret", "new-secret").is_ok());
    assert_eq!(
        UserPasswordChangeRequest::new("same", "same").unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        UserPasswordChangeRequest::new("", "new").unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_register_request_normalizes_account_fields() {
    let request = AuthRegisterRequest::new("  Meat.Lover@Example.COM ", "pw", "meat_lover").unwrap();
    assert_eq!(request.email, "meat.lover@example.com");
    assert_eq!(request.username, "meat_lover");

    assert!(AuthRegisterRequest::new("not-an-email", "pw", "meat_lover").is_err());
    assert!(AuthRegisterRequest::new("a@b.io", "pw", "x").is_err());
}

#[test]
fn test_auth_responses_use_camel_case() {
    let login: AuthLoginResponse =
        serde_json::from_value(json!({ "accessToken": "abc", "expiresIn": 3600 })).unwrap();
    assert_eq!(login.access_token, "abc");
    assert_eq!(login.expires_in, 3600);
}

#[test]
fn test_health_response() {
    let health: HealthResponse =
        serde_json::from_value(json!({ "status": "ok", "time": "2025-01-15T10:00:00Z" })).unwrap();
    assert!(health.is_healthy());
}
