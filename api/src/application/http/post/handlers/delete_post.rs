use crate::application::auth::AuthUser;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use quillbox_core::domain::post::ports::PostService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePostResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{post_id}",
    tag = "post",
    summary = "Delete post",
    description = "Soft-deletes a post. The row stays in place and disappears from reads.",
    params(
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, body = DeletePostResponse)
    ),
)]
pub async fn delete_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Response<DeletePostResponse>, ApiError> {
    state
        .service
        .delete_post(post_id, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePostResponse {
        message: format!("Post '{}' deleted", post_id),
    }))
}
