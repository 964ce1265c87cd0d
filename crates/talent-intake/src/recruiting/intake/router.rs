use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::repository::CandidateRepository;
use super::service::IntakeService;
use crate::recruiting::postings::repository::PostingRepository;

/// Header set the legacy edge function answered preflights with; every
/// response from this router carries it.
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Router builder exposing the intake endpoint to the automation system.
pub fn intake_router<C, P>(service: Arc<IntakeService<C, P>>) -> Router
where
    C: CandidateRepository + 'static,
    P: PostingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/intake/candidates",
            post(ingest_handler::<C, P>).options(preflight_handler),
        )
        .with_state(service)
}

/// The body is taken as a raw string so the audit copy keeps the exact bytes
/// the automation sent.
pub(crate) async fn ingest_handler<C, P>(
    State(service): State<Arc<IntakeService<C, P>>>,
    body: String,
) -> Response
where
    C: CandidateRepository + 'static,
    P: PostingRepository + 'static,
{
    match service.ingest(&body) {
        Ok(receipt) => {
            with_cors((StatusCode::CREATED, axum::Json(receipt)).into_response())
        }
        Err(error) if error.is_client_error() => {
            let payload = json!({
                "error": error.to_string(),
                "reason": error.reason(),
            });
            with_cors((StatusCode::BAD_REQUEST, axum::Json(payload)).into_response())
        }
        Err(error) => {
            let mut payload = json!({
                "error": error.to_string(),
                "reason": error.reason(),
            });
            if let Some(details) = error.details() {
                payload["details"] = json!(details);
            }
            with_cors((StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response())
        }
    }
}

/// Preflight: empty body, permissive headers.
pub(crate) async fn preflight_handler() -> Response {
    with_cors(StatusCode::OK.into_response())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
