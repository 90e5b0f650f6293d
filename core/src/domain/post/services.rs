use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    post::{
        entities::Post,
        ports::{PostRepository, PostService},
        value_objects::{BulkDeleteResult, CreatePostInput, UpdatePostInput},
    },
    query::{
        ports::QueryRepository,
        services::QueryBuilder,
        value_objects::{FilterPredicate, PaginatedResult, QueryOptions, RawParams},
    },
};

/// Fields free-text search runs over for posts.
pub const POST_SEARCH_FIELDS: [&str; 2] = ["title", "content"];

#[derive(Debug, Clone)]
pub struct PostServiceImpl<P> {
    post_repository: Arc<P>,
    query_builder: QueryBuilder<P>,
}

impl<P> PostServiceImpl<P>
where
    P: PostRepository + QueryRepository<Record = Post>,
{
    pub fn new(post_repository: Arc<P>) -> Self {
        Self {
            query_builder: QueryBuilder::new(post_repository.clone()),
            post_repository,
        }
    }

    /// Domain defaults handed to the query facade: search over title/content,
    /// newest first, soft-deleted posts excluded. The base filter is declared
    /// as a caller filter so it wins over anything inferred from raw input.
    fn list_options() -> QueryOptions {
        QueryOptions {
            search_fields: POST_SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
            custom_filters: HashMap::from([(
                "isDeleted".to_string(),
                FilterPredicate::Equals(json!(false)),
            )]),
            ..Default::default()
        }
    }
}

impl<P> PostService for PostServiceImpl<P>
where
    P: PostRepository + QueryRepository<Record = Post>,
{
    async fn create_post(&self, input: CreatePostInput, user_id: Uuid) -> Result<Post, CoreError> {
        let post = Post::new(
            input.title,
            input.content,
            input.images.unwrap_or_default(),
            input.is_published.unwrap_or(false),
            user_id,
        );

        self.post_repository.create(post).await
    }

    async fn get_post(&self, post_id: Uuid) -> Result<Option<Post>, CoreError> {
        self.post_repository.get_by_id(post_id).await
    }

    async fn get_posts(&self, raw: RawParams) -> Result<PaginatedResult<Post>, CoreError> {
        self.query_builder
            .find_many_with_pagination(&raw, Self::list_options())
            .await
    }

    async fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        input: UpdatePostInput,
    ) -> Result<Post, CoreError> {
        let mut post = self
            .post_repository
            .get_by_id(post_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        post.apply_update(input, user_id);

        self.post_repository.update(post).await
    }

    async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        self.post_repository
            .get_by_id(post_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.post_repository.soft_delete(post_id, user_id).await
    }

    async fn delete_posts(
        &self,
        user_id: Uuid,
        post_ids: Vec<Uuid>,
    ) -> Result<BulkDeleteResult, CoreError> {
        let count = self
            .post_repository
            .soft_delete_many(post_ids, user_id)
            .await?;

        Ok(BulkDeleteResult { count })
    }

    async fn count_posts(
        &self,
        filters: Option<HashMap<String, FilterPredicate>>,
    ) -> Result<u64, CoreError> {
        self.query_builder.get_count(filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::pagination::page_meta;
    use crate::domain::query::value_objects::{QueryDescriptor, SortOrder};
    use std::sync::Mutex;

    /// In-memory double implementing both ports, recording what reaches the
    /// repository boundary.
    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<Vec<Post>>,
        last_descriptor: Mutex<Option<QueryDescriptor>>,
        last_count_filters: Mutex<Option<Option<HashMap<String, FilterPredicate>>>>,
        deleted: Mutex<Vec<(Vec<Uuid>, Uuid)>>,
    }

    impl PostRepository for RecordingRepository {
        async fn create(&self, post: Post) -> Result<Post, CoreError> {
            self.posts
                .lock()
                .expect("posts lock poisoned")
                .push(post.clone());
            Ok(post)
        }

        async fn get_by_id(&self, post_id: Uuid) -> Result<Option<Post>, CoreError> {
            let posts = self.posts.lock().expect("posts lock poisoned");
            Ok(posts
                .iter()
                .find(|p| p.id == post_id && !p.is_deleted)
                .cloned())
        }

        async fn update(&self, post: Post) -> Result<Post, CoreError> {
            let mut posts = self.posts.lock().expect("posts lock poisoned");
            if let Some(existing) = posts.iter_mut().find(|p| p.id == post.id) {
                *existing = post.clone();
            }
            Ok(post)
        }

        async fn soft_delete(&self, post_id: Uuid, deleted_by: Uuid) -> Result<(), CoreError> {
            self.deleted
                .lock()
                .expect("deleted lock poisoned")
                .push((vec![post_id], deleted_by));
            let mut posts = self.posts.lock().expect("posts lock poisoned");
            if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                post.soft_delete(deleted_by);
            }
            Ok(())
        }

        async fn soft_delete_many(
            &self,
            post_ids: Vec<Uuid>,
            deleted_by: Uuid,
        ) -> Result<u64, CoreError> {
            let count = post_ids.len() as u64;
            self.deleted
                .lock()
                .expect("deleted lock poisoned")
                .push((post_ids, deleted_by));
            Ok(count)
        }
    }

    impl QueryRepository for RecordingRepository {
        type Record = Post;

        async fn find_many(
            &self,
            descriptor: QueryDescriptor,
        ) -> Result<PaginatedResult<Post>, CoreError> {
            let meta = page_meta(0, descriptor.page, descriptor.limit);
            *self
                .last_descriptor
                .lock()
                .expect("descriptor lock poisoned") = Some(descriptor);
            Ok(PaginatedResult {
                items: Vec::new(),
                meta,
            })
        }

        async fn count(
            &self,
            filters: Option<HashMap<String, FilterPredicate>>,
        ) -> Result<u64, CoreError> {
            *self
                .last_count_filters
                .lock()
                .expect("filters lock poisoned") = Some(filters);
            Ok(3)
        }
    }

    fn service() -> (PostServiceImpl<RecordingRepository>, Arc<RecordingRepository>) {
        let repository = Arc::new(RecordingRepository::default());
        (PostServiceImpl::new(repository.clone()), repository)
    }

    fn create_input(title: &str) -> CreatePostInput {
        CreatePostInput {
            title: title.to_string(),
            content: "content".to_string(),
            images: None,
            is_published: Some(true),
        }
    }

    #[tokio::test]
    async fn test_create_post_stamps_author_and_defaults() {
        let (service, _) = service();
        let author = Uuid::new_v4();

        let post = service
            .create_post(create_input("Hello"), author)
            .await
            .expect("create should succeed");

        assert_eq!(post.title, "Hello");
        assert_eq!(post.created_by, author);
        assert_eq!(post.updated_by, author);
        assert!(post.images.is_empty());
        assert!(!post.is_deleted);
    }

    #[tokio::test]
    async fn test_get_posts_supplies_domain_defaults() {
        let (service, repository) = service();

        let raw: RawParams = [("search".to_string(), json!("rust"))].into_iter().collect();
        service.get_posts(raw).await.expect("list should succeed");

        let descriptor = repository
            .last_descriptor
            .lock()
            .expect("descriptor lock poisoned")
            .clone()
            .expect("descriptor should be recorded");
        assert_eq!(
            descriptor.search_fields,
            Some(vec!["title".to_string(), "content".to_string()])
        );
        assert_eq!(descriptor.sort_by, "createdAt");
        assert_eq!(descriptor.sort_order, SortOrder::Desc);
        assert_eq!(
            descriptor.custom_filters.get("isDeleted"),
            Some(&FilterPredicate::Equals(json!(false)))
        );
    }

    #[tokio::test]
    async fn test_base_filter_wins_over_raw_is_deleted() {
        let (service, repository) = service();

        // A caller trying to see deleted posts through the open parameter map
        // is overridden by the service's declared base filter.
        let raw: RawParams = [("isDeleted".to_string(), json!(true))]
            .into_iter()
            .collect();
        service.get_posts(raw).await.expect("list should succeed");

        let descriptor = repository
            .last_descriptor
            .lock()
            .expect("descriptor lock poisoned")
            .clone()
            .expect("descriptor should be recorded");
        assert_eq!(
            descriptor.custom_filters.get("isDeleted"),
            Some(&FilterPredicate::Equals(json!(false)))
        );
    }

    #[tokio::test]
    async fn test_update_post_missing_is_not_found() {
        let (service, _) = service();

        let result = service
            .update_post(Uuid::new_v4(), Uuid::new_v4(), UpdatePostInput::default())
            .await;
        assert_eq!(result.map(|_| ()), Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_post_applies_partial_changes() {
        let (service, _) = service();
        let author = Uuid::new_v4();
        let editor = Uuid::new_v4();
        let created = service
            .create_post(create_input("Original"), author)
            .await
            .expect("create should succeed");

        let input = UpdatePostInput {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = service
            .update_post(editor, created.id, input)
            .await
            .expect("update should succeed");

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, "content");
        assert_eq!(updated.updated_by, editor);
        assert_eq!(updated.created_by, author);
    }

    #[tokio::test]
    async fn test_delete_post_soft_deletes_and_hides() {
        let (service, _) = service();
        let author = Uuid::new_v4();
        let created = service
            .create_post(create_input("Doomed"), author)
            .await
            .expect("create should succeed");

        service
            .delete_post(created.id, author)
            .await
            .expect("delete should succeed");

        let found = service
            .get_post(created.id)
            .await
            .expect("get should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_posts_reports_count() {
        let (service, repository) = service();
        let actor = Uuid::new_v4();
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];

        let result = service
            .delete_posts(actor, ids.clone())
            .await
            .expect("bulk delete should succeed");

        assert_eq!(result, BulkDeleteResult { count: 2 });
        let deleted = repository.deleted.lock().expect("deleted lock poisoned");
        assert_eq!(deleted.as_slice(), &[(ids, actor)]);
    }

    #[tokio::test]
    async fn test_count_posts_passes_filters_through() {
        let (service, repository) = service();
        let filters = HashMap::from([(
            "isPublished".to_string(),
            FilterPredicate::Equals(json!(true)),
        )]);

        let count = service
            .count_posts(Some(filters.clone()))
            .await
            .expect("count should succeed");

        assert_eq!(count, 3);
        let recorded = repository
            .last_count_filters
            .lock()
            .expect("filters lock poisoned")
            .clone();
        assert_eq!(recorded, Some(Some(filters)));
    }
}
