//! Credit risk evaluation: request intake, feature mapping, model inference and scoring policy.
//!
//! A request flows through the [`RequestGuard`] at the boundary, becomes a [`FeatureVector`]
//! inside the [`RiskEvaluator`], is scored by the [`ModelProvider`], and leaves as a
//! [`CreditScore`]. Only the router converts failures into transport responses.

pub mod domain;
pub(crate) mod evaluation;
pub mod features;
pub(crate) mod guard;
pub mod model;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{CreditApplication, CreditRequest, CreditScore, RiskLevel};
pub use evaluation::{
    max_approved_amount, score_from_probability, suggested_interest_rate, EvaluationError,
    RiskEvaluator, ScoringConfig, DEFAULT_BASE_INTEREST_RATE, DEFAULT_MIN_SCORE_APPROVE,
    SCORE_CEILING, SCORE_FLOOR,
};
pub use features::{FeatureVector, FEATURE_NAMES};
pub use guard::{RequestGuard, RequestViolation, AGE_RANGE, TERM_RANGE};
pub use model::{
    ArtifactError, Classifier, DecisionTree, ForestClassifier, ModelError, ModelProvider, TreeNode,
    DEFAULT_MODEL_PATH,
};
pub use router::{risk_router, API_V1_PREFIX};
