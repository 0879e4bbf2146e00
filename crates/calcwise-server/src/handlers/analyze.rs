//! Analysis handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{AppError, AppState};
use calcwise_core::{AnalysisRequest, AnalysisResponse};

/// POST /api/analyze - Turn calculator results into recommendations
///
/// Unknown calculator types get the generic fallback analysis. A body that is
/// not valid JSON, or data that does not fit the calculator, is a 400.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected analysis body");
        AppError::from_rejection(rejection)
    })?;

    let calculator = request.calculator_type.clone();
    let response = state.engine.analyze(request).map_err(|e| {
        tracing::info!(calculator = %calculator, error = %e, "Analysis input rejected");
        AppError::from_core(e)
    })?;

    Ok(Json(response))
}
