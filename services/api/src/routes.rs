use crate::infra::{AppState, InMemoryCandidateRepository, InMemoryPostingRepository};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use talent_intake::recruiting::intake::{intake_router, CandidateRepository, IntakeService};
use talent_intake::recruiting::postings::{
    posting_router, JobPostingService, PostingRepository,
};

/// Compose the intake and administrative routers with the service plumbing
/// endpoints.
pub(crate) fn with_recruiting_routes<C, P>(
    intake: Arc<IntakeService<C, P>>,
    postings: Arc<JobPostingService<P>>,
) -> axum::Router
where
    C: CandidateRepository + 'static,
    P: PostingRepository + 'static,
{
    let dashboard = axum::Router::new()
        .route(
            "/api/v1/candidates",
            axum::routing::get(candidates_endpoint::<C, P>),
        )
        .with_state(intake.clone());

    intake_router(intake)
        .merge(posting_router(postings))
        .merge(dashboard)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) fn recruiting_service_pair(
    postings: Arc<InMemoryPostingRepository>,
    candidates: Arc<InMemoryCandidateRepository>,
) -> (
    Arc<IntakeService<InMemoryCandidateRepository, InMemoryPostingRepository>>,
    Arc<JobPostingService<InMemoryPostingRepository>>,
) {
    let intake = Arc::new(IntakeService::new(candidates, postings.clone()));
    let posting_service = Arc::new(JobPostingService::new(postings));
    (intake, posting_service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Read-only dashboard listing, newest first.
pub(crate) async fn candidates_endpoint<C, P>(
    axum::extract::State(service): axum::extract::State<Arc<IntakeService<C, P>>>,
) -> axum::response::Response
where
    C: CandidateRepository + 'static,
    P: PostingRepository + 'static,
{
    match service.list() {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}
