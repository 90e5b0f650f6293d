use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::health::entities::DatabaseHealthStatus;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Readiness probe: verifies the database answers a real query.
    fn readiness(&self) -> impl Future<Output = DatabaseHealthStatus> + Send;

    /// Liveness probe: returns the total record count behind the service.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
