//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use saku_core::predictor::{MockClassifier, MockRegressor};
use saku_core::{ClassifierModel, RegressorModel};
use tower::ServiceExt;

fn setup_test_app(probabilities: [f64; 2], ideal_saving_ratio: f64) -> Router {
    let models = ModelContext::mock(probabilities, ideal_saving_ratio);
    create_router(models, Settings::default(), ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn analyze_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ========== Health & Models ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app([0.5, 0.5], 0.2);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_list_models() {
    let app = setup_test_app([0.5, 0.5], 0.2);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    let models = json.as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["role"], "classifier");
    assert_eq!(models[0]["classes"], serde_json::json!([0, 1]));
    assert_eq!(models[1]["role"], "regressor");
}

// ========== Analyze ==========

#[tokio::test]
async fn test_analyze_frugal() {
    let app = setup_test_app([0.2, 0.8], 0.3);

    let response = app
        .oneshot(analyze_request(serde_json::json!({
            "income": 5_000_000.0,
            "food": 1_000_000.0,
            "transport": 500_000.0,
            "entertainment": 500_000.0,
            "shopping": 500_000.0,
            "others": 500_000.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["total_expense"], 3_000_000.0);
    assert_eq!(json["remaining"], 2_000_000.0);
    assert_eq!(json["prediction"]["status"], "frugal");
    assert_eq!(json["plan"]["outcome"], "no_reduction_needed");
}

#[tokio::test]
async fn test_analyze_wasteful_returns_plan() {
    let app = setup_test_app([0.9, 0.1], 0.5);

    let response = app
        .oneshot(analyze_request(serde_json::json!({
            "income": 2_000_000.0,
            "food": 800_000.0,
            "shopping": 600_000.0,
            "entertainment": 400_000.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["prediction"]["status"], "wasteful");
    assert_eq!(json["plan"]["outcome"], "reduce");

    // gap = (0.5 - 0.1) * 2,000,000
    let target = json["plan"]["target"].as_f64().unwrap();
    assert!((target - 800_000.0).abs() < 1e-6);

    let items = json["plan"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["category"], "food");
    assert_eq!(items[1]["category"], "shopping");
    assert_eq!(items[2]["category"], "entertainment");
}

#[tokio::test]
async fn test_analyze_zero_income_is_bad_request() {
    let models = ModelContext::new(
        ClassifierModel::Mock(MockClassifier::new([0.5, 0.5])),
        RegressorModel::Mock(MockRegressor::new(0.2)),
    )
    .unwrap();
    let classifier = match models.classifier() {
        ClassifierModel::Mock(m) => m.clone(),
        _ => unreachable!(),
    };
    let app = create_router(models, Settings::default(), ServerConfig::default());

    let response = app
        .oneshot(analyze_request(serde_json::json!({ "income": 0.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Income"));
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn test_analyze_negative_expense_is_bad_request() {
    let app = setup_test_app([0.5, 0.5], 0.2);

    let response = app
        .oneshot(analyze_request(serde_json::json!({
            "income": 1_000_000.0,
            "food": -5.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_model_failure_is_sanitized() {
    let models = ModelContext::new(
        ClassifierModel::Mock(MockClassifier::failing()),
        RegressorModel::mock(0.2),
    )
    .unwrap();
    let app = create_router(models, Settings::default(), ServerConfig::default());

    let response = app
        .oneshot(analyze_request(serde_json::json!({ "income": 1_000_000.0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Model inference failed");
}

#[tokio::test]
async fn test_analyze_missing_income_is_rejected() {
    let app = setup_test_app([0.5, 0.5], 0.2);

    let response = app
        .oneshot(analyze_request(serde_json::json!({ "food": 100.0 })))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// ========== Error Mapping ==========

#[test]
fn test_core_error_mapping() {
    let err = AppError::from_core(saku_core::Error::InvalidIncome(-1.0));
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(err.internal.is_none());

    let err = AppError::from_core(saku_core::Error::ModelInference("NaN".into()));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Model inference failed");

    let err = AppError::from_core(saku_core::Error::ModelLoad("missing".into()));
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "An internal error occurred");
    assert!(err.internal.is_some());
}
