use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm::ColumnTrait;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository};
use crate::entity::posts::{Column as PostColumn, Entity as PostEntity};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> DatabaseHealthStatus {
        match PostEntity::find().count(&self.db).await {
            Ok(_) => DatabaseHealthStatus::up(),
            Err(e) => {
                error!("Database health check failed: {}", e);
                DatabaseHealthStatus::down(e.to_string())
            }
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        PostEntity::find()
            .filter(PostColumn::IsDeleted.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count posts for health probe: {}", e);
                CoreError::InternalServerError
            })
    }
}
