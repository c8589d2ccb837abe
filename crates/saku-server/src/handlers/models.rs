//! Model and health handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use saku_core::ModelInfo;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/models - Describe the loaded models
pub async fn list_models(State(state): State<Arc<AppState>>) -> Json<Vec<ModelInfo>> {
    Json(state.models.info().to_vec())
}
