use serde::{Deserialize, Serialize};

/// Raw financial profile as received from the core banking backend, before bounds checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub client_id: i64,
    pub age: i64,
    pub monthly_income: f64,
    pub monthly_debt: f64,
    pub requested_amount: f64,
    pub term_in_months: i64,
}

/// Validated financial profile consumed by the evaluator.
///
/// Produced by [`RequestGuard`](super::RequestGuard); the evaluator assumes every bound holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditRequest {
    /// Core banking reference; never used in scoring.
    pub client_id: u64,
    pub age: u8,
    pub monthly_income: f64,
    pub monthly_debt: f64,
    pub requested_amount: f64,
    pub term_in_months: u8,
}

impl CreditRequest {
    pub fn debt_to_income_ratio(&self) -> f64 {
        if self.monthly_income == 0.0 {
            return 0.0;
        }
        self.monthly_debt / self.monthly_income
    }
}

/// Coarse bucketing of the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const LOW_RISK_FLOOR: u16 = 750;
    pub const MEDIUM_RISK_FLOOR: u16 = 650;

    /// Lower bounds are inclusive: 750 is `Low`, 650 is `Medium`.
    pub fn from_score(score: u16) -> Self {
        if score >= Self::LOW_RISK_FLOOR {
            RiskLevel::Low
        } else if score >= Self::MEDIUM_RISK_FLOOR {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Result of a risk evaluation returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditScore {
    pub score: u16,
    pub risk_level: RiskLevel,
    pub is_approved: bool,
    pub suggested_interest_rate: f64,
    pub max_approved_amount: f64,
}
