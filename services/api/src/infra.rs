use axum::http::HeaderValue;
use metrics_exporter_prometheus::PrometheusHandle;
use nexus_risk::config::AppConfig;
use nexus_risk::risk::{ModelProvider, RiskEvaluator, ScoringConfig};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) evaluator: Arc<RiskEvaluator>,
    pub(crate) project_name: Arc<str>,
}

/// CLI flag beats `RISK_MODEL_PATH`, which beats the conventional file name.
pub(crate) fn resolve_model_path(cli_override: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    cli_override.unwrap_or_else(|| config.model.path.clone())
}

/// Load the classifier once and wrap it for sharing across handlers.
pub(crate) fn build_evaluator(model_path: &Path, scoring: ScoringConfig) -> RiskEvaluator {
    let provider = Arc::new(ModelProvider::load(model_path));
    RiskEvaluator::new(provider, scoring)
}

/// Browser access for the backend and frontend origins; `None` when no origin is configured.
pub(crate) fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring CORS origin that is not a valid header value");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    )
}
