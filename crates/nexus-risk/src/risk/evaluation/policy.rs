use super::super::domain::RiskLevel;

pub const SCORE_FLOOR: u16 = 300;
pub const SCORE_CEILING: u16 = 850;
const SCORE_SPAN: f64 = (SCORE_CEILING - SCORE_FLOOR) as f64;

const LOW_RISK_DISCOUNT: f64 = 0.02;
const HIGH_RISK_PREMIUM: f64 = 0.05;
const INCOME_MULTIPLIER: f64 = 10.0;
/// Above this magnitude an `f64` no longer resolves whole cents.
const CENT_PRECISION_LIMIT: f64 = 1e15;

/// Map an approval probability onto the 300-850 scale, truncating toward the floor.
///
/// Out-of-range probabilities are clamped so the score bounds always hold. Callers must
/// reject non-finite probabilities before calling.
pub fn score_from_probability(probability: f64) -> u16 {
    let raw = (f64::from(SCORE_FLOOR) + probability * SCORE_SPAN).floor();
    raw.clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING)) as u16
}

/// Rate adjustment by tier. No floor or ceiling is applied to the result.
pub fn suggested_interest_rate(score: u16, base_rate: f64) -> f64 {
    match RiskLevel::from_score(score) {
        RiskLevel::Low => base_rate - LOW_RISK_DISCOUNT,
        RiskLevel::Medium => base_rate,
        RiskLevel::High => base_rate + HIGH_RISK_PREMIUM,
    }
}

/// Income-derived lending capacity; the requested amount plays no part.
pub fn max_approved_amount(monthly_income: f64, is_approved: bool) -> f64 {
    if !is_approved {
        return 0.0;
    }
    round_to_cents(monthly_income * INCOME_MULTIPLIER)
}

/// Two-decimal rounding with half-cent ties going to the even cent.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    if amount.abs() >= CENT_PRECISION_LIMIT {
        return amount;
    }
    let cents = amount * 100.0;
    if !cents.is_finite() {
        return amount;
    }
    cents.round_ties_even() / 100.0
}
