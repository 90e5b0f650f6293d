use crate::application::auth::AuthUser;
use crate::application::http::post::validators::CreatePostValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use quillbox_core::domain::post::entities::Post;
use quillbox_core::domain::post::ports::PostService;
use quillbox_core::domain::post::value_objects::CreatePostInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatePostResponse {
    pub data: Post,
}

#[utoipa::path(
    post,
    path = "",
    tag = "post",
    summary = "Create post",
    description = "Creates a new post owned by the authenticated user.",
    request_body = CreatePostValidator,
    responses(
        (status = 201, body = CreatePostResponse)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidateJson(payload): ValidateJson<CreatePostValidator>,
) -> Result<Response<CreatePostResponse>, ApiError> {
    let post = state
        .service
        .create_post(
            CreatePostInput {
                title: payload.title,
                content: payload.content,
                images: payload.images,
                is_published: payload.is_published,
            },
            user_id,
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreatePostResponse { data: post }))
}
