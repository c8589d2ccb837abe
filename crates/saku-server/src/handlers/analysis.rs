//! Analysis handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use saku_core::{Analysis, Analyzer, FinancialInput};

use crate::{AppError, AppState};

/// POST /api/analyze - Evaluate one month of income and expenses
///
/// Returns the full analysis: status, probabilities, savings gap,
/// reduction plan and composition chart.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(input): Json<FinancialInput>,
) -> Result<Json<Analysis>, AppError> {
    let analysis = Analyzer::with_settings(&state.models, &state.settings)
        .analyze(&input)
        .map_err(AppError::from_core)?;

    info!(
        status = %analysis.prediction.status,
        gap_amount = analysis.gap_amount,
        recommendations = analysis.plan.items().len(),
        "Analysis complete"
    );

    Ok(Json(analysis))
}
