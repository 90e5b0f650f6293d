use std::sync::Arc;

use crate::domain::common::QuillboxConfig;
use crate::domain::post::services::PostServiceImpl;
use crate::infrastructure::db::postgres::{Postgres, PostgresConfig};
use crate::infrastructure::post::PostgresPostRepository;

pub type QuillboxService = PostServiceImpl<PostgresPostRepository>;

pub async fn create_service(config: QuillboxConfig) -> Result<QuillboxService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let post_repository = Arc::new(PostgresPostRepository::new(postgres.get_db()));

    Ok(PostServiceImpl::new(post_repository))
}
