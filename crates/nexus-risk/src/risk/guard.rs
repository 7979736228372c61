use std::ops::RangeInclusive;

use super::domain::{CreditApplication, CreditRequest};

pub const AGE_RANGE: RangeInclusive<i64> = 18..=100;
pub const TERM_RANGE: RangeInclusive<i64> = 1..=60;

/// Validation errors raised before a request reaches the evaluator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestViolation {
    #[error("client_id must be a positive integer (found {0})")]
    ClientId(i64),
    #[error("age must be between 18 and 100 (found {0})")]
    Age(i64),
    #[error("monthly_income must be greater than 0 (found {0})")]
    MonthlyIncome(f64),
    #[error("monthly_debt must be 0 or greater (found {0})")]
    MonthlyDebt(f64),
    #[error("requested_amount must be greater than 0 (found {0})")]
    RequestedAmount(f64),
    #[error("term_in_months must be between 1 and 60 (found {0})")]
    TermInMonths(i64),
}

/// Guard responsible for producing bounds-checked `CreditRequest` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestGuard;

impl RequestGuard {
    /// Check every field in declaration order and report the first violation.
    pub fn request_from_application(
        &self,
        application: CreditApplication,
    ) -> Result<CreditRequest, RequestViolation> {
        let CreditApplication {
            client_id,
            age,
            monthly_income,
            monthly_debt,
            requested_amount,
            term_in_months,
        } = application;

        let client_id = u64::try_from(client_id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(RequestViolation::ClientId(client_id))?;

        if !AGE_RANGE.contains(&age) {
            return Err(RequestViolation::Age(age));
        }

        if !(monthly_income.is_finite() && monthly_income > 0.0) {
            return Err(RequestViolation::MonthlyIncome(monthly_income));
        }

        if !(monthly_debt.is_finite() && monthly_debt >= 0.0) {
            return Err(RequestViolation::MonthlyDebt(monthly_debt));
        }

        if !(requested_amount.is_finite() && requested_amount > 0.0) {
            return Err(RequestViolation::RequestedAmount(requested_amount));
        }

        if !TERM_RANGE.contains(&term_in_months) {
            return Err(RequestViolation::TermInMonths(term_in_months));
        }

        Ok(CreditRequest {
            client_id,
            age: age as u8,
            monthly_income,
            monthly_debt,
            requested_amount,
            term_in_months: term_in_months as u8,
        })
    }
}
