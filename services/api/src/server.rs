use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCandidateRepository, InMemoryPostingRepository};
use crate::routes::{recruiting_service_pair, with_recruiting_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_intake::config::AppConfig;
use talent_intake::error::AppError;
use talent_intake::telemetry;
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

    let postings = Arc::new(InMemoryPostingRepository::default());
    let candidates = Arc::new(InMemoryCandidateRepository::default());
    let (intake_service, posting_service) = recruiting_service_pair(postings, candidates);

    let app = with_recruiting_routes(intake_service, posting_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "recruiting back-office ready");

    axum::serve(listener, app).await?;
    Ok(())
}
