use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use tracing::error;

use super::domain::{CreditApplication, CreditScore};
use super::evaluation::RiskEvaluator;
use super::guard::RequestGuard;
use crate::error::AppError;

pub const API_V1_PREFIX: &str = "/api/v1";

/// Router builder exposing the risk evaluation endpoint.
pub fn risk_router(evaluator: Arc<RiskEvaluator>) -> Router {
    Router::new()
        .route(
            &format!("{API_V1_PREFIX}/evaluate-risk"),
            post(evaluate_handler),
        )
        .with_state(evaluator)
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<RiskEvaluator>>,
    Json(application): Json<CreditApplication>,
) -> Result<Json<CreditScore>, AppError> {
    let request = RequestGuard.request_from_application(application)?;

    let score = evaluator.evaluate(&request).map_err(|err| {
        error!(client_id = request.client_id, error = %err, "risk evaluation failed");
        err
    })?;

    Ok(Json(score))
}
