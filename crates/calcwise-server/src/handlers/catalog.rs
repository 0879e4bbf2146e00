//! Catalog and health handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppState};
use calcwise_core::{CalculatorInfo, CalculatorType, Category};

/// Query parameters for listing calculators
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Only list calculators in this category
    pub category: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub calculators: usize,
}

/// GET /api/health - Liveness probe
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        calculators: state.engine.calculator_types().len(),
    })
}

/// GET /api/calculators - List supported calculators
pub async fn list_calculators(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogQuery>,
) -> Result<Json<Vec<CalculatorInfo>>, AppError> {
    let category = params
        .category
        .as_deref()
        .map(|c| c.parse::<Category>())
        .transpose()
        .map_err(|e| AppError::bad_request(&e))?;

    let calculators = state
        .engine
        .calculator_types()
        .into_iter()
        .filter(|c| category.map_or(true, |cat| c.category() == cat))
        .map(|c| c.info())
        .collect();

    Ok(Json(calculators))
}

/// GET /api/calculators/:id - Look up one calculator
///
/// Accepts any spelling the analyze endpoint accepts (`autoLoan`, `auto_loan`).
pub async fn get_calculator(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CalculatorInfo>, AppError> {
    let calculator = id
        .parse::<CalculatorType>()
        .ok()
        .filter(|c| state.engine.calculator_types().contains(c))
        .ok_or_else(|| AppError::not_found(&format!("Unknown calculator: {}", id)))?;

    Ok(Json(calculator.info()))
}
