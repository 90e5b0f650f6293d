use crate::application::http::{health::HealthApiDoc, post::router::PostApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quillbox API"
    ),
    nest(
        (path = "/posts", api = PostApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
