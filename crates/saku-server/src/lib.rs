//! Saku Web Server
//!
//! Axum-based JSON API for the Saku financial health estimator. One
//! `POST /api/analyze` request is one full evaluation.
//!
//! Security features:
//! - Restrictive CORS policy
//! - Input validation (non-negative amounts, positive income)
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use saku_core::{ModelContext, Settings};

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
///
/// Models are read-only after loading, so requests share them without locking.
pub struct AppState {
    pub models: ModelContext,
    pub settings: Settings,
}

/// Create the application router
pub fn create_router(models: ModelContext, settings: Settings, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { models, settings });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/models", get(handlers::list_models))
        .route("/analyze", post(handlers::analyze));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    models: ModelContext,
    settings: Settings,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    for meta in models.info() {
        info!(
            role = %meta.role,
            kind = %meta.kind,
            sha256 = meta.sha256.as_deref().unwrap_or("-"),
            "Serving model"
        );
    }

    let app = create_router(models, settings, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error: input problems are reported back, everything else is sanitized
    pub fn from_core(err: saku_core::Error) -> Self {
        if err.is_user_error() {
            return Self::bad_request(&err.to_string());
        }
        match err {
            saku_core::Error::ModelInference(_) => Self {
                internal: Some(err.into()),
                ..Self::internal("Model inference failed")
            },
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
