use std::collections::HashMap;
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    post::{
        entities::Post,
        value_objects::{BulkDeleteResult, CreatePostInput, UpdatePostInput},
    },
    query::value_objects::{FilterPredicate, PaginatedResult, RawParams},
};

/// Persistence port for posts. List queries go through the companion
/// [`QueryRepository`](crate::domain::query::ports::QueryRepository)
/// implementation; this trait covers the record-level operations.
#[cfg_attr(test, mockall::automock)]
pub trait PostRepository: Send + Sync {
    fn create(&self, post: Post) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn get_by_id(
        &self,
        post_id: Uuid,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;

    fn update(&self, post: Post) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn soft_delete(
        &self,
        post_id: Uuid,
        deleted_by: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn soft_delete_many(
        &self,
        post_ids: Vec<Uuid>,
        deleted_by: Uuid,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait PostService: Send + Sync {
    fn create_post(
        &self,
        input: CreatePostInput,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn get_post(
        &self,
        post_id: Uuid,
    ) -> impl Future<Output = Result<Option<Post>, CoreError>> + Send;

    fn get_posts(
        &self,
        raw: RawParams,
    ) -> impl Future<Output = Result<PaginatedResult<Post>, CoreError>> + Send;

    fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> impl Future<Output = Result<Post, CoreError>> + Send;

    fn delete_post(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_posts(
        &self,
        user_id: Uuid,
        post_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<BulkDeleteResult, CoreError>> + Send;

    fn count_posts(
        &self,
        filters: Option<HashMap<String, FilterPredicate>>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
