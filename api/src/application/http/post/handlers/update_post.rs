use crate::application::auth::AuthUser;
use crate::application::http::post::validators::UpdatePostValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use quillbox_core::domain::post::entities::Post;
use quillbox_core::domain::post::ports::PostService;
use quillbox_core::domain::post::value_objects::UpdatePostInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePostResponse {
    pub data: Post,
}

#[utoipa::path(
    put,
    path = "/{post_id}",
    tag = "post",
    summary = "Update post",
    description = "Applies a partial update. Omitted fields keep their current value.",
    params(
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body = UpdatePostValidator,
    responses(
        (status = 200, body = UpdatePostResponse)
    ),
)]
pub async fn update_post(
    Path(post_id): Path<Uuid>,
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidateJson(payload): ValidateJson<UpdatePostValidator>,
) -> Result<Response<UpdatePostResponse>, ApiError> {
    let post = state
        .service
        .update_post(
            user_id,
            post_id,
            UpdatePostInput {
                title: payload.title,
                content: payload.content,
                images: payload.images,
                is_published: payload.is_published,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePostResponse { data: post }))
}
