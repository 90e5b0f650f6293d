use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub connection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DatabaseHealthStatus {
    pub fn up() -> Self {
        Self {
            status: "up".to_string(),
            connection: "active".to_string(),
            error: None,
        }
    }

    pub fn down(error: String) -> Self {
        Self {
            status: "down".to_string(),
            connection: "failed".to_string(),
            error: Some(error),
        }
    }
}
