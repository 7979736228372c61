use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SCORE_APPROVE: u16 = 650;
pub const DEFAULT_BASE_INTEREST_RATE: f64 = 0.15;

/// Business dials applied on top of the model probability.
///
/// `min_score_approve` is deliberately independent from the risk tier boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub min_score_approve: u16,
    pub base_interest_rate: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_score_approve: DEFAULT_MIN_SCORE_APPROVE,
            base_interest_rate: DEFAULT_BASE_INTEREST_RATE,
        }
    }
}
