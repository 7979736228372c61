use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::risk::domain::{CreditApplication, CreditRequest};
use crate::risk::evaluation::{RiskEvaluator, ScoringConfig};
use crate::risk::features::FeatureVector;
use crate::risk::model::{Classifier, ModelError, ModelProvider};

/// Classifier that always answers with the same approval probability.
pub(super) struct FixedProbability(pub f64);

impl Classifier for FixedProbability {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 2], ModelError> {
        Ok([1.0 - self.0, self.0])
    }
}

/// Classifier that fails the way a shape mismatch would.
pub(super) struct BrokenClassifier;

impl Classifier for BrokenClassifier {
    fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 2], ModelError> {
        Err(ModelError::Inference("expected 5 features, got 4".to_string()))
    }
}

pub(super) fn request() -> CreditRequest {
    CreditRequest {
        client_id: 1001,
        age: 34,
        monthly_income: 5000.0,
        monthly_debt: 750.0,
        requested_amount: 20_000.0,
        term_in_months: 36,
    }
}

pub(super) fn application() -> CreditApplication {
    CreditApplication {
        client_id: 1001,
        age: 34,
        monthly_income: 5000.0,
        monthly_debt: 750.0,
        requested_amount: 20_000.0,
        term_in_months: 36,
    }
}

pub(super) fn evaluator_with(provider: ModelProvider, config: ScoringConfig) -> RiskEvaluator {
    RiskEvaluator::new(Arc::new(provider), config)
}

pub(super) fn evaluator_for_probability(probability: f64) -> RiskEvaluator {
    evaluator_with(
        ModelProvider::from_classifier(FixedProbability(probability)),
        ScoringConfig::default(),
    )
}

pub(super) fn unavailable_evaluator() -> RiskEvaluator {
    evaluator_with(ModelProvider::unavailable(), ScoringConfig::default())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
