use super::common::*;
use crate::risk::domain::RiskLevel;
use crate::risk::evaluation::{EvaluationError, ScoringConfig};
use crate::risk::model::ModelProvider;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn medium_probability_is_approved_at_base_rate() {
    let outcome = evaluator_for_probability(0.72)
        .evaluate(&request())
        .expect("evaluation succeeds");

    assert_eq!(outcome.score, 696);
    assert_eq!(outcome.risk_level, RiskLevel::Medium);
    assert!(outcome.is_approved);
    assert_close(outcome.suggested_interest_rate, 0.15);
    assert_eq!(outcome.max_approved_amount, 50_000.0);
}

#[test]
fn strong_probability_earns_discounted_rate() {
    let outcome = evaluator_for_probability(0.95)
        .evaluate(&request())
        .expect("evaluation succeeds");

    assert_eq!(outcome.score, 822);
    assert_eq!(outcome.risk_level, RiskLevel::Low);
    assert!(outcome.is_approved);
    assert_close(outcome.suggested_interest_rate, 0.13);
    assert_eq!(outcome.max_approved_amount, 50_000.0);
}

#[test]
fn weak_probability_is_declined_with_premium_rate() {
    let outcome = evaluator_for_probability(0.10)
        .evaluate(&request())
        .expect("evaluation succeeds");

    assert_eq!(outcome.score, 355);
    assert_eq!(outcome.risk_level, RiskLevel::High);
    assert!(!outcome.is_approved);
    assert_close(outcome.suggested_interest_rate, 0.20);
    assert_eq!(outcome.max_approved_amount, 0.0);
}

#[test]
fn max_amount_ignores_requested_amount() {
    let evaluator = evaluator_for_probability(0.8);
    let mut small = request();
    small.requested_amount = 500.0;
    let mut large = request();
    large.requested_amount = 5_000_000.0;

    let small = evaluator.evaluate(&small).expect("evaluation succeeds");
    let large = evaluator.evaluate(&large).expect("evaluation succeeds");

    assert_eq!(small.max_approved_amount, large.max_approved_amount);
}

#[test]
fn max_amount_rounds_to_cents() {
    let mut request = request();
    request.monthly_income = 3333.3333;

    let outcome = evaluator_for_probability(0.9)
        .evaluate(&request)
        .expect("evaluation succeeds");

    assert_eq!(outcome.max_approved_amount, 33_333.33);
}

#[test]
fn approval_threshold_is_independent_from_tiers() {
    let config = ScoringConfig {
        min_score_approve: 700,
        ..ScoringConfig::default()
    };
    let evaluator = evaluator_with(
        ModelProvider::from_classifier(FixedProbability(0.72)),
        config,
    );

    let outcome = evaluator.evaluate(&request()).expect("evaluation succeeds");

    assert_eq!(outcome.score, 696);
    assert_eq!(outcome.risk_level, RiskLevel::Medium);
    assert!(!outcome.is_approved);
    assert_eq!(outcome.max_approved_amount, 0.0);
}

#[test]
fn lowered_threshold_approves_high_risk_scores() {
    let config = ScoringConfig {
        min_score_approve: 300,
        base_interest_rate: 0.10,
    };
    let evaluator = evaluator_with(
        ModelProvider::from_classifier(FixedProbability(0.0)),
        config,
    );

    let outcome = evaluator.evaluate(&request()).expect("evaluation succeeds");

    assert_eq!(outcome.score, 300);
    assert_eq!(outcome.risk_level, RiskLevel::High);
    assert!(outcome.is_approved);
    assert_close(outcome.suggested_interest_rate, 0.15);
}

#[test]
fn adversarial_probabilities_are_clamped() {
    let high = evaluator_for_probability(1.2)
        .evaluate(&request())
        .expect("evaluation succeeds");
    let low = evaluator_for_probability(-0.4)
        .evaluate(&request())
        .expect("evaluation succeeds");

    assert_eq!(high.score, 850);
    assert_eq!(low.score, 300);
}

#[test]
fn non_finite_probability_is_an_inference_failure() {
    let err = evaluator_for_probability(f64::NAN)
        .evaluate(&request())
        .expect_err("nan probability");

    assert!(matches!(err, EvaluationError::InferenceFailure(_)));
}

#[test]
fn missing_model_fails_every_call_identically() {
    let evaluator = unavailable_evaluator();

    for _ in 0..3 {
        let err = evaluator.evaluate(&request()).expect_err("no model loaded");
        assert_eq!(err, EvaluationError::ModelUnavailable);
    }
    assert!(!evaluator.is_model_loaded());
}

#[test]
fn classifier_failures_propagate_as_inference_failures() {
    let evaluator = evaluator_with(
        ModelProvider::from_classifier(BrokenClassifier),
        ScoringConfig::default(),
    );

    match evaluator.evaluate(&request()) {
        Err(EvaluationError::InferenceFailure(reason)) => {
            assert!(reason.contains("expected 5 features"));
        }
        other => panic!("expected inference failure, got {other:?}"),
    }
}
