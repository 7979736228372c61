use crate::cli::ServeArgs;
use crate::infra::{build_evaluator, cors_layer, resolve_model_path, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nexus_risk::config::AppConfig;
use nexus_risk::error::AppError;
use nexus_risk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let model_path = resolve_model_path(args.model.take(), &config);
    let evaluator = Arc::new(build_evaluator(&model_path, config.scoring));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        evaluator: evaluator.clone(),
        project_name: Arc::from(config.project_name.as_str()),
    };

    let mut app = with_service_routes(evaluator.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);
    if let Some(cors) = cors_layer(&config.server.cors_origins) {
        app = app.layer(cors);
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model_loaded = evaluator.is_model_loaded(),
        min_score_approve = config.scoring.min_score_approve,
        base_interest_rate = config.scoring.base_interest_rate,
        "{} ready",
        config.project_name
    );

    axum::serve(listener, app).await?;
    Ok(())
}
