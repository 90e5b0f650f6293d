use crate::application::auth::AuthUser;
use crate::application::http::post::validators::BulkDeletePostsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use quillbox_core::domain::post::ports::PostService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkDeletePostsResponse {
    pub count: u64,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "post",
    summary = "Delete posts",
    description = "Soft-deletes a batch of posts and reports how many rows were marked.",
    request_body = BulkDeletePostsValidator,
    responses(
        (status = 200, body = BulkDeletePostsResponse)
    ),
)]
pub async fn delete_posts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidateJson(payload): ValidateJson<BulkDeletePostsValidator>,
) -> Result<Response<BulkDeletePostsResponse>, ApiError> {
    let result = state
        .service
        .delete_posts(user_id, payload.ids)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkDeletePostsResponse {
        count: result.count,
    }))
}
