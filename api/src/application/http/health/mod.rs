use axum::{Router, extract::State, routing::get};
use quillbox_core::domain::health::entities::DatabaseHealthStatus;
use quillbox_core::domain::health::ports::HealthCheckRepository;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::server::api_entities::api_error::ApiError;
use super::server::api_entities::response::Response;
use super::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub posts: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Verifies database connectivity by counting live posts.",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let posts = state
        .health_repository
        .health()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        posts,
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Response<DatabaseHealthStatus> {
    Response::OK(state.health_repository.readiness().await)
}

#[derive(OpenApi)]
#[openapi(paths(health, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/ready", root_path), get(ready))
}
