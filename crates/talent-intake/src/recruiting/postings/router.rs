use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{JobPostingId, NewJobPosting, PostingUpdate};
use super::repository::PostingRepository;
use super::service::{JobPostingService, PostingServiceError};

/// Router builder exposing the administrative posting endpoints.
pub fn posting_router<R>(service: Arc<JobPostingService<R>>) -> Router
where
    R: PostingRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/postings",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/api/v1/postings/:posting_id",
            axum::routing::patch(update_handler::<R>).delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/postings/:posting_id/toggle",
            post(toggle_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<JobPostingService<R>>>) -> Response
where
    R: PostingRepository + 'static,
{
    match service.list() {
        Ok(postings) => (StatusCode::OK, axum::Json(postings)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<JobPostingService<R>>>,
    axum::Json(input): axum::Json<NewJobPosting>,
) -> Response
where
    R: PostingRepository + 'static,
{
    match service.create(input) {
        Ok(posting) => (StatusCode::CREATED, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<JobPostingService<R>>>,
    Path(posting_id): Path<String>,
    axum::Json(update): axum::Json<PostingUpdate>,
) -> Response
where
    R: PostingRepository + 'static,
{
    let id = JobPostingId(posting_id);
    match service.update(&id, update) {
        Ok(posting) => (StatusCode::OK, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn toggle_handler<R>(
    State(service): State<Arc<JobPostingService<R>>>,
    Path(posting_id): Path<String>,
) -> Response
where
    R: PostingRepository + 'static,
{
    let id = JobPostingId(posting_id);
    match service.toggle_status(&id) {
        Ok(posting) => (StatusCode::OK, axum::Json(posting)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<JobPostingService<R>>>,
    Path(posting_id): Path<String>,
) -> Response
where
    R: PostingRepository + 'static,
{
    let id = JobPostingId(posting_id);
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PostingServiceError) -> Response {
    let status = match &error {
        PostingServiceError::BlankTitle | PostingServiceError::Validation(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PostingServiceError::ActiveConflict => StatusCode::CONFLICT,
        PostingServiceError::NotFound => StatusCode::NOT_FOUND,
        PostingServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = match error.code() {
        Some(code) => json!({ "error": error.to_string(), "code": code }),
        None => json!({ "error": error.to_string() }),
    };

    (status, axum::Json(payload)).into_response()
}
