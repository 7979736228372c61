mod config;
mod policy;

pub use config::{ScoringConfig, DEFAULT_BASE_INTEREST_RATE, DEFAULT_MIN_SCORE_APPROVE};
pub use policy::{
    max_approved_amount, score_from_probability, suggested_interest_rate, SCORE_CEILING,
    SCORE_FLOOR,
};

use std::sync::Arc;

use tracing::debug;

use super::domain::{CreditRequest, CreditScore, RiskLevel};
use super::features::FeatureVector;
use super::model::{ModelError, ModelProvider};

/// Failure of a single evaluation. Never converted into a default score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("AI model is not initialized or found")]
    ModelUnavailable,
    #[error("inference failure: {0}")]
    InferenceFailure(String),
}

impl From<ModelError> for EvaluationError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::Unavailable => EvaluationError::ModelUnavailable,
            ModelError::Inference(reason) => EvaluationError::InferenceFailure(reason),
        }
    }
}

/// Stateless evaluator that applies the scoring policy to model output.
#[derive(Debug, Clone)]
pub struct RiskEvaluator {
    provider: Arc<ModelProvider>,
    config: ScoringConfig,
}

impl RiskEvaluator {
    pub fn new(provider: Arc<ModelProvider>, config: ScoringConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn is_model_loaded(&self) -> bool {
        self.provider.is_loaded()
    }

    pub fn evaluate(&self, request: &CreditRequest) -> Result<CreditScore, EvaluationError> {
        let features = FeatureVector::from_request(request);
        let probability = self.provider.predict(&features)?;
        if !probability.is_finite() {
            return Err(EvaluationError::InferenceFailure(format!(
                "model returned non-finite approval probability {probability}"
            )));
        }

        let score = score_from_probability(probability);
        let risk_level = RiskLevel::from_score(score);
        let is_approved = score >= self.config.min_score_approve;

        let outcome = CreditScore {
            score,
            risk_level,
            is_approved,
            suggested_interest_rate: suggested_interest_rate(
                score,
                self.config.base_interest_rate,
            ),
            max_approved_amount: max_approved_amount(request.monthly_income, is_approved),
        };

        debug!(
            client_id = request.client_id,
            probability,
            score,
            risk_level = risk_level.label(),
            is_approved,
            "risk evaluation complete"
        );

        Ok(outcome)
    }
}
