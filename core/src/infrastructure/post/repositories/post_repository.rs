use std::collections::HashMap;

use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::post::{entities::Post, ports::PostRepository};
use crate::domain::query::pagination::page_meta;
use crate::domain::query::ports::QueryRepository;
use crate::domain::query::value_objects::{
    DateFilter, FilterPredicate, PaginatedResult, QueryDescriptor, SortOrder,
};
use crate::entity::posts::{
    self, ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPostRepository {
    pub db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Resolves wire-level field names (camelCase, as the raw parameter surface
/// uses) to columns. Unknown names resolve to `None` and are skipped.
fn column_for(field: &str) -> Option<PostColumn> {
    match field {
        "id" => Some(PostColumn::Id),
        "title" => Some(PostColumn::Title),
        "content" => Some(PostColumn::Content),
        "isPublished" | "is_published" => Some(PostColumn::IsPublished),
        "isDeleted" | "is_deleted" => Some(PostColumn::IsDeleted),
        "createdAt" | "created_at" | "createdDate" => Some(PostColumn::CreatedAt),
        "updatedAt" | "updated_at" | "updatedDate" => Some(PostColumn::UpdatedAt),
        "deletedAt" | "deleted_at" | "deletedDate" => Some(PostColumn::DeletedAt),
        "createdBy" | "created_by" | "authorId" => Some(PostColumn::CreatedBy),
        "updatedBy" | "updated_by" => Some(PostColumn::UpdatedBy),
        _ => None,
    }
}

fn is_uuid_column(column: PostColumn) -> bool {
    matches!(
        column,
        PostColumn::Id | PostColumn::CreatedBy | PostColumn::UpdatedBy | PostColumn::DeletedBy
    )
}

/// Converts a loose JSON scalar into a database value for the given column.
/// Strings aimed at uuid columns are parsed first; Prisma used to do that
/// coercion implicitly.
fn sea_value(column: PostColumn, value: &Value) -> Option<sea_orm::Value> {
    match value {
        Value::String(s) if is_uuid_column(column) => Uuid::parse_str(s).ok().map(Into::into),
        Value::String(s) => Some(s.clone().into()),
        Value::Bool(b) => Some((*b).into()),
        Value::Number(n) => n
            .as_i64()
            .map(Into::into)
            .or_else(|| n.as_f64().map(Into::into)),
        _ => None,
    }
}

fn predicate_expr(
    column: PostColumn,
    field: &str,
    predicate: &FilterPredicate,
) -> Result<Option<SimpleExpr>, CoreError> {
    let expr = match predicate {
        FilterPredicate::Equals(value) => match sea_value(column, value) {
            Some(v) => column.eq(v),
            None => return Ok(None),
        },
        FilterPredicate::EndsWith(suffix) => column.ends_with(suffix.clone()),
        FilterPredicate::DateGte(DateFilter::Valid(dt)) => column.gte(dt.naive_utc()),
        FilterPredicate::DateGte(DateFilter::Invalid(raw)) => {
            return Err(CoreError::InvalidDateFilter {
                field: field.to_string(),
                value: raw.clone(),
            });
        }
        FilterPredicate::In(values) => {
            column.is_in(values.iter().filter_map(|v| sea_value(column, v)))
        }
        FilterPredicate::ContainsInsensitive(text) => {
            Expr::col((posts::Entity, column)).ilike(format!("%{text}%"))
        }
    };

    Ok(Some(expr))
}

/// AND-conjunction of every resolvable filter predicate.
fn filters_condition(filters: &HashMap<String, FilterPredicate>) -> Result<Condition, CoreError> {
    let mut condition = Condition::all();

    for (field, predicate) in filters {
        let Some(column) = column_for(field) else {
            warn!("Skipping filter on unknown field '{}'", field);
            continue;
        };
        if let Some(expr) = predicate_expr(column, field, predicate)? {
            condition = condition.add(expr);
        }
    }

    Ok(condition)
}

/// Row offset for a page. Non-positive pages floor to 0; the multiply
/// saturates so absurdly large page numbers cannot overflow.
fn page_offset(page: i64, limit: i64) -> u64 {
    page.saturating_sub(1).max(0).saturating_mul(limit) as u64
}

fn descriptor_condition(descriptor: &QueryDescriptor) -> Result<Condition, CoreError> {
    let mut condition = filters_condition(&descriptor.custom_filters)?;

    // Free-text search: OR of ILIKE over the configured fields. Absent
    // search_fields means search is not configured for this resource at all.
    if let (Some(search), Some(fields)) = (&descriptor.search, &descriptor.search_fields) {
        let mut any = Condition::any();
        let mut resolved = 0;
        for field in fields {
            if let Some(column) = column_for(field) {
                any = any.add(Expr::col((posts::Entity, column)).ilike(format!("%{search}%")));
                resolved += 1;
            }
        }
        if resolved > 0 {
            condition = condition.add(any);
        }
    }

    Ok(condition)
}

impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, CoreError> {
        let created_post = PostEntity::insert(PostActiveModel {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            images: Set(post.images),
            is_published: Set(post.is_published),
            is_deleted: Set(post.is_deleted),
            created_at: Set(post.created_at.naive_utc()),
            updated_at: Set(post.updated_at.naive_utc()),
            deleted_at: Set(post.deleted_at.map(|dt| dt.naive_utc())),
            created_by: Set(post.created_by),
            updated_by: Set(post.updated_by),
            deleted_by: Set(post.deleted_by),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Post::from)
        .map_err(|e| {
            error!("Failed to create post: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created_post)
    }

    async fn get_by_id(&self, post_id: Uuid) -> Result<Option<Post>, CoreError> {
        let post = PostEntity::find()
            .filter(PostColumn::Id.eq(post_id))
            .filter(PostColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get post by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Post::from);

        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, CoreError> {
        let updated_post = PostEntity::update(PostActiveModel {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            images: Set(post.images),
            is_published: Set(post.is_published),
            is_deleted: Set(post.is_deleted),
            created_at: Set(post.created_at.naive_utc()),
            updated_at: Set(post.updated_at.naive_utc()),
            deleted_at: Set(post.deleted_at.map(|dt| dt.naive_utc())),
            created_by: Set(post.created_by),
            updated_by: Set(post.updated_by),
            deleted_by: Set(post.deleted_by),
        })
        .filter(PostColumn::Id.eq(post.id))
        .exec(&self.db)
        .await
        .map(Post::from)
        .map_err(|e| {
            error!("Failed to update post: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(updated_post)
    }

    async fn soft_delete(&self, post_id: Uuid, deleted_by: Uuid) -> Result<(), CoreError> {
        let now = chrono::Utc::now().naive_utc();

        PostEntity::update_many()
            .col_expr(PostColumn::IsDeleted, Expr::value(true))
            .col_expr(PostColumn::DeletedAt, Expr::value(now))
            .col_expr(PostColumn::DeletedBy, Expr::value(deleted_by))
            .col_expr(PostColumn::UpdatedAt, Expr::value(now))
            .col_expr(PostColumn::UpdatedBy, Expr::value(deleted_by))
            .filter(PostColumn::Id.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete post: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn soft_delete_many(
        &self,
        post_ids: Vec<Uuid>,
        deleted_by: Uuid,
    ) -> Result<u64, CoreError> {
        let now = chrono::Utc::now().naive_utc();

        let result = PostEntity::update_many()
            .col_expr(PostColumn::IsDeleted, Expr::value(true))
            .col_expr(PostColumn::DeletedAt, Expr::value(now))
            .col_expr(PostColumn::DeletedBy, Expr::value(deleted_by))
            .col_expr(PostColumn::UpdatedAt, Expr::value(now))
            .col_expr(PostColumn::UpdatedBy, Expr::value(deleted_by))
            .filter(PostColumn::Id.is_in(post_ids))
            .filter(PostColumn::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to bulk delete posts: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}

impl QueryRepository for PostgresPostRepository {
    type Record = Post;

    async fn find_many(
        &self,
        descriptor: QueryDescriptor,
    ) -> Result<PaginatedResult<Post>, CoreError> {
        let condition = descriptor_condition(&descriptor)?;

        if !descriptor.relations.is_empty() {
            // The posts schema is flat; authors are bare uuids with nothing
            // to eager-load.
            debug!("Ignoring relation paths {:?}", descriptor.relations);
        }

        let total = PostEntity::find()
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count posts: {}", e);
                CoreError::InternalServerError
            })?;

        let sort_column = column_for(&descriptor.sort_by).unwrap_or_else(|| {
            debug!("Unknown sort field '{}', sorting by createdAt", descriptor.sort_by);
            PostColumn::CreatedAt
        });

        let mut query = PostEntity::find().filter(condition);
        query = match descriptor.sort_order {
            SortOrder::Asc => query.order_by_asc(sort_column),
            SortOrder::Desc => query.order_by_desc(sort_column),
        };

        // Negative pages were forwarded as-is; SQL still needs a sane offset.
        let items = query
            .limit(descriptor.limit as u64)
            .offset(page_offset(descriptor.page, descriptor.limit))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch posts: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Post::from)
            .collect::<Vec<Post>>();

        Ok(PaginatedResult {
            items,
            meta: page_meta(total, descriptor.page, descriptor.limit),
        })
    }

    async fn count(
        &self,
        filters: Option<HashMap<String, FilterPredicate>>,
    ) -> Result<u64, CoreError> {
        let condition = match &filters {
            Some(filters) => filters_condition(filters)?,
            None => Condition::all(),
        };

        let total = PostEntity::find()
            .filter(condition)
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count posts: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(total)
    }
}
