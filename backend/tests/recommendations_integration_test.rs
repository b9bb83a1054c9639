//! Integration tests for the recommendation endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_recommendations_require_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, _) = app
        .get_auth("/api/recommendations/exercise", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_exercise_plan_for_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    app.create_test_profile(&user.access_token).await;

    let (status, response) = app
        .get_auth("/api/recommendations/exercise", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["profile"]["bmiCategory"], "Normal");
    // Normal + Maintain + Moderate: the 3-entry base plan untouched
    let plan = response["exercisePlan"].as_array().unwrap();
    assert_eq!(plan.len(), 3);
    assert_eq!(response["recommendations"]["totalWorkouts"], 3);
    assert_eq!(response["recommendations"]["weeklyMinutes"], 95);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_diet_plan_rejects_unknown_type() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    app.create_test_profile(&user.access_token).await;

    let (status, response) = app
        .get_auth("/api/recommendations/diet?dietType=keto", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["message"], "Invalid diet type. Use \"veg\" or \"nonveg\".");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_diet_plan_defaults_to_veg() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    app.create_test_profile(&user.access_token).await;

    let (status, response) = app
        .get_auth("/api/recommendations/diet", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["dietType"], "veg");
    assert_eq!(response["recommendations"]["dailyCalories"], 2200);
    assert_eq!(response["dietPlan"]["breakfast"].as_array().unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_complete_plan_combines_both() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    app.create_test_profile(&user.access_token).await;

    let (status, response) = app
        .get_auth(
            "/api/recommendations/complete?dietType=nonveg",
            &user.access_token,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["profile"]["bmi"], 23.1);
    assert_eq!(response["dietPlan"]["type"], "nonveg");
    assert_eq!(response["exercisePlan"]["weeklyMinutes"], 95);
    assert_eq!(response["generalTips"].as_array().unwrap().len(), 5);
}
