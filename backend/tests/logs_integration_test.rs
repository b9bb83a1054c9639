//! Integration tests for the daily log endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_endpoints_require_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.post("/api/logs/water", r#"{"amount": 250}"#).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.get("/api/logs/today").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_water_logging_is_additive_same_day() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"amount": 250});
    let (status, _) = app
        .post_auth("/api/logs/water", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let body = json!({"amount": 500});
    let (status, response) = app
        .post_auth("/api/logs/water", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["log"]["waterIntake"], 750.0);

    // A single log row, not two
    let (_, today) = app.get_auth("/api/logs/today", &user.access_token).await;
    let today: serde_json::Value = serde_json::from_str(&today).unwrap();
    assert_eq!(today["log"]["waterIntake"], 750.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_water_rejects_non_positive_amount() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for amount in [0.0, -100.0] {
        let body = json!({"amount": amount});
        let (status, _) = app
            .post_auth("/api/logs/water", &body.to_string(), &user.access_token)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_workout_validation() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    // Zero duration rejected
    let body = json!({"name": "Run", "duration": 0, "type": "Cardio"});
    let (status, _) = app
        .post_auth("/api/logs/workout", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown type rejected with the valid options listed
    let body = json!({"name": "Run", "duration": 30, "type": "Swimming"});
    let (status, response) = app
        .post_auth("/api/logs/workout", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("Cardio, Strength, HIIT, Yoga, Flexibility"));

    // Valid workout lands in the log
    let body = json!({"name": "Run", "duration": 30, "type": "Cardio"});
    let (status, response) = app
        .post_auth("/api/logs/workout", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let workouts = response["log"]["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["name"], "Run");
    assert_eq!(workouts[0]["duration"], 30);
    assert_eq!(workouts[0]["type"], "Cardio");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weight_log_cascades_into_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    app.create_test_profile(&user.access_token).await;

    let body = json!({"weight": 80});
    let (status, response) = app
        .post_auth("/api/logs/weight", &body.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["log"]["weight"], 80.0);
    // 80 kg at 180 cm -> 24.7, still Normal
    assert_eq!(response["updatedProfile"]["weight"], 80.0);
    assert_eq!(response["updatedProfile"]["bmi"], 24.7);
    assert_eq!(response["updatedProfile"]["bmiCategory"], "Normal");

    let (_, profile) = app.get_auth("/api/health/profile", &user.access_token).await;
    let profile: serde_json::Value = serde_json::from_str(&profile).unwrap();
    assert_eq!(profile["profile"]["weight"], 80.0);
    assert_eq!(profile["profile"]["bmi"], 24.7);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weight_log_without_profile_still_succeeds() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"weight": 75});
    let (status, response) = app
        .post_auth("/api/logs/weight", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["log"]["weight"], 75.0);
    assert!(response["updatedProfile"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weight_out_of_range_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for weight in [19.9, 500.1] {
        let body = json!({"weight": weight});
        let (status, _) = app
            .post_auth("/api/logs/weight", &body.to_string(), &user.access_token)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_today_log_created_lazily() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/api/logs/today", &user.access_token).await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["log"]["waterIntake"], 0.0);
    assert_eq!(response["log"]["calories"], 0.0);
    assert_eq!(response["log"]["workouts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_range_requires_both_dates() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app
        .get_auth("/api/logs/range?startDate=2024-03-01", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Please provide startDate and endDate");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_range_returns_logged_days() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({"amount": 300});
    app.post_auth("/api/logs/water", &body.to_string(), &user.access_token)
        .await;

    let today = chrono::Local::now().date_naive();
    let path = format!(
        "/api/logs/range?startDate={}&endDate={}",
        today - chrono::Duration::days(7),
        today
    );
    let (status, response) = app.get_auth(&path, &user.access_token).await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 1);
    assert_eq!(response["logs"][0]["waterIntake"], 300.0);
}
