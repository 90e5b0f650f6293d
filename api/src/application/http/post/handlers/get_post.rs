use crate::application::auth::AuthUser;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use quillbox_core::domain::post::entities::Post;
use quillbox_core::domain::post::ports::PostService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPostResponse {
    pub data: Post,
}

#[utoipa::path(
    get,
    path = "/{post_id}",
    tag = "post",
    summary = "Get post",
    params(
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, body = GetPostResponse)
    ),
)]
pub async fn get_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
) -> Result<Response<GetPostResponse>, ApiError> {
    let post = state
        .service
        .get_post(post_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Post '{}' not found", post_id)))?;

    Ok(Response::OK(GetPostResponse { data: post }))
}
