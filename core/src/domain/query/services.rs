use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::query::ports::QueryRepository;
use crate::domain::query::translator::translate;
use crate::domain::query::value_objects::{
    FilterPredicate, PaginatedResult, QueryOptions, RawParams,
};

/// Facade over a [`QueryRepository`]: translates raw parameters into a
/// descriptor and performs the single outbound repository call. Stateless
/// apart from the repository handle; no retries, no caching, and repository
/// errors propagate unchanged.
#[derive(Debug, Clone)]
pub struct QueryBuilder<R> {
    repository: Arc<R>,
}

impl<R: QueryRepository> QueryBuilder<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn find_many_with_pagination(
        &self,
        raw: &RawParams,
        options: QueryOptions,
    ) -> Result<PaginatedResult<R::Record>, CoreError> {
        let descriptor = translate(raw, options);
        self.repository.find_many(descriptor).await
    }

    pub async fn get_count(
        &self,
        filters: Option<HashMap<String, FilterPredicate>>,
    ) -> Result<u64, CoreError> {
        self.repository.count(filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::entities::Post;
    use crate::domain::query::pagination::page_meta;
    use crate::domain::query::ports::MockQueryRepository;
    use crate::domain::query::value_objects::{SortOrder, SortSpec};
    use serde_json::json;
    use uuid::Uuid;

    fn sample_post(title: &str) -> Post {
        Post::new(
            title.to_string(),
            "content".to_string(),
            Vec::new(),
            true,
            Uuid::new_v4(),
        )
    }

    fn paginated(items: Vec<Post>, total: u64) -> PaginatedResult<Post> {
        let meta = page_meta(total, 1, 10);
        PaginatedResult { items, meta }
    }

    fn raw(pairs: &[(&str, serde_json::Value)]) -> RawParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_forwards_translated_descriptor_to_repository() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_find_many()
            .withf(|descriptor| {
                descriptor.page == 2
                    && descriptor.limit == 100
                    && descriptor.search.as_deref() == Some("rust")
                    && descriptor.search_fields
                        == Some(vec!["title".to_string(), "content".to_string()])
                    && descriptor.sort_by == "createdAt"
                    && descriptor.sort_order == SortOrder::Desc
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(paginated(vec![sample_post("hit")], 1)) }));

        let builder = QueryBuilder::new(Arc::new(repository));
        let raw = raw(&[
            ("page", json!(2)),
            ("limit", json!(150)),
            ("search", json!("rust")),
        ]);
        let options = QueryOptions {
            search_fields: vec!["title".to_string(), "content".to_string()],
            ..Default::default()
        };

        let result = builder.find_many_with_pagination(&raw, options).await;
        assert_eq!(result.map(|r| r.meta.total), Ok(1));
    }

    #[tokio::test]
    async fn test_repository_meta_is_returned_untouched() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_find_many()
            .returning(|_| {
                Box::pin(async { Ok(paginated(vec![sample_post("a"), sample_post("b")], 15)) })
            });

        let builder = QueryBuilder::new(Arc::new(repository));
        let result = builder
            .find_many_with_pagination(&RawParams::new(), QueryOptions::default())
            .await
            .expect("find_many should succeed");

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.meta, page_meta(15, 1, 10));
    }

    #[tokio::test]
    async fn test_inferred_and_declared_filters_reach_the_repository() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_find_many()
            .withf(|descriptor| {
                descriptor.custom_filters.get("email")
                    == Some(&FilterPredicate::EndsWith("@example.com".to_string()))
                    && descriptor.custom_filters.get("isDeleted")
                        == Some(&FilterPredicate::Equals(json!(false)))
            })
            .returning(|_| Box::pin(async { Ok(paginated(Vec::new(), 0)) }));

        let builder = QueryBuilder::new(Arc::new(repository));
        let raw = raw(&[("emailDomain", json!("example.com"))]);
        let options = QueryOptions {
            custom_filters: HashMap::from([(
                "isDeleted".to_string(),
                FilterPredicate::Equals(json!(false)),
            )]),
            ..Default::default()
        };

        let result = builder.find_many_with_pagination(&raw, options).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_repository_errors_propagate_unchanged() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_find_many()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let builder = QueryBuilder::new(Arc::new(repository));
        let result = builder
            .find_many_with_pagination(&RawParams::new(), QueryOptions::default())
            .await;
        assert_eq!(result.map(|_| ()), Err(CoreError::InternalServerError));
    }

    #[tokio::test]
    async fn test_get_count_passes_filters_through() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_count()
            .withf(|filters| {
                filters
                    .as_ref()
                    .is_some_and(|f| f.contains_key("isPublished"))
            })
            .returning(|_| Box::pin(async { Ok(7) }));

        let builder = QueryBuilder::new(Arc::new(repository));
        let filters = HashMap::from([(
            "isPublished".to_string(),
            FilterPredicate::Equals(json!(true)),
        )]);
        assert_eq!(builder.get_count(Some(filters)).await, Ok(7));
    }

    #[tokio::test]
    async fn test_default_sort_spec_reaches_descriptor() {
        let mut repository = MockQueryRepository::default();
        repository
            .expect_find_many()
            .withf(|descriptor| {
                descriptor.sort_by == "updatedAt" && descriptor.sort_order == SortOrder::Asc
            })
            .returning(|_| Box::pin(async { Ok(paginated(Vec::new(), 0)) }));

        let builder = QueryBuilder::new(Arc::new(repository));
        let options = QueryOptions {
            default_sort: SortSpec {
                field: "updatedAt".to_string(),
                order: SortOrder::Asc,
            },
            ..Default::default()
        };
        let result = builder
            .find_many_with_pagination(&RawParams::new(), options)
            .await;
        assert!(result.is_ok());
    }
}
