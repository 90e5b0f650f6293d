use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use super::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub root_path: String,
}

pub async fn get_config(State(state): State<AppState>) -> Json<AppConfig> {
    Json(AppConfig {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
    })
}
