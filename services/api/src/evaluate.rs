use crate::infra::{build_evaluator, resolve_model_path};
use clap::Args;
use nexus_risk::config::AppConfig;
use nexus_risk::error::AppError;
use nexus_risk::risk::{CreditApplication, CreditRequest, CreditScore, RequestGuard};
use nexus_risk::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Core banking client identifier
    #[arg(long)]
    pub(crate) client_id: i64,
    /// Client age in years (18-100)
    #[arg(long)]
    pub(crate) age: i64,
    /// Declared monthly income
    #[arg(long)]
    pub(crate) monthly_income: f64,
    /// Total current monthly debt payments
    #[arg(long)]
    pub(crate) monthly_debt: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) requested_amount: f64,
    /// Loan term in months (1-60)
    #[arg(long)]
    pub(crate) term_in_months: i64,
    /// Override the classifier artifact location (RISK_MODEL_PATH)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
    /// Print the raw JSON response instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn application(&self) -> CreditApplication {
        CreditApplication {
            client_id: self.client_id,
            age: self.age,
            monthly_income: self.monthly_income,
            monthly_debt: self.monthly_debt,
            requested_amount: self.requested_amount,
            term_in_months: self.term_in_months,
        }
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let request = RequestGuard.request_from_application(args.application())?;
    let model_path = resolve_model_path(args.model.clone(), &config);
    let evaluator = build_evaluator(&model_path, config.scoring);
    let score = evaluator.evaluate(&request)?;

    if args.json {
        println!("{}", render_json(&score)?);
    } else {
        render_score(&request, &score, config.scoring.min_score_approve);
    }

    Ok(())
}

fn render_json(score: &CreditScore) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(score)?)
}

fn render_score(request: &CreditRequest, score: &CreditScore, min_score_approve: u16) {
    println!("Risk evaluation for client {}", request.client_id);
    println!(
        "Profile: age {} | income {:.2} | debt {:.2} (DTI {:.2}) | requested {:.2} over {} months",
        request.age,
        request.monthly_income,
        request.monthly_debt,
        request.debt_to_income_ratio(),
        request.requested_amount,
        request.term_in_months
    );
    println!(
        "\nScore: {} ({} risk)",
        score.score,
        score.risk_level.label()
    );

    if score.is_approved {
        println!("Decision: approved (threshold {min_score_approve})");
        println!("Maximum approved amount: {:.2}", score.max_approved_amount);
    } else {
        println!("Decision: declined (threshold {min_score_approve})");
    }
    println!(
        "Suggested interest rate: {:.2}%",
        score.suggested_interest_rate * 100.0
    );
}
