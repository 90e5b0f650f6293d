use std::sync::Arc;

use quillbox_core::{
    application::QuillboxService, infrastructure::health::PostgresHealthCheckRepository,
};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: QuillboxService,
    pub health_repository: Arc<PostgresHealthCheckRepository>,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: QuillboxService,
        health_repository: PostgresHealthCheckRepository,
    ) -> Self {
        Self {
            args,
            service,
            health_repository: Arc::new(health_repository),
        }
    }
}
