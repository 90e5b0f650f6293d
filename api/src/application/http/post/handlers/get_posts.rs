use crate::application::auth::AuthUser;
use crate::application::http::query_extractor::RawQueryParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use quillbox_core::domain::post::entities::Post;
use quillbox_core::domain::post::ports::PostService;
use quillbox_core::domain::query::value_objects::PageMeta;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPostsResponse {
    pub items: Vec<Post>,
    pub meta: PageMeta,
}

#[utoipa::path(
    get,
    path = "",
    tag = "post",
    summary = "List posts",
    description = "Paginated listing. Reserved query keys are page, limit, search, sortBy, and \
                   sortOrder; any other key becomes a filter on the matching column.",
    responses(
        (status = 200, body = GetPostsResponse)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    RawQueryParams(raw): RawQueryParams,
) -> Result<Response<GetPostsResponse>, ApiError> {
    let result = state.service.get_posts(raw).await.map_err(|e| {
        error!("Failed to list posts: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(GetPostsResponse {
        items: result.items,
        meta: result.meta,
    }))
}
