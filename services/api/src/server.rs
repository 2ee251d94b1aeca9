use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, AppState, InMemoryAssessmentRepository, InMemoryLeadRepository,
};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use riskcheck::assessment::{AdminGate, AssessmentService, Catalog};
use riskcheck::config::AppConfig;
use riskcheck::error::AppError;
use riskcheck::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let assessments = Arc::new(InMemoryAssessmentRepository::default());
    let leads = Arc::new(InMemoryLeadRepository::default());
    let service = Arc::new(AssessmentService::new(
        Arc::new(Catalog::standard()),
        assessments,
        leads,
        default_scoring_config(),
    ));
    let admin = AdminGate::new(config.admin_key.clone());

    let app = with_assessment_routes(service, admin)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "contractor legal checkup service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
