use std::collections::HashMap;
use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::query::value_objects::{FilterPredicate, PaginatedResult, QueryDescriptor};

/// Storage-side contract the query facade drives. Implementations must honor
/// every part of the descriptor: page/limit, sort, free-text search over the
/// listed fields (none when the list is absent), the filter conjunction, and
/// relation eager-loading. The returned meta is authoritative; the facade
/// never re-derives it from the items.
#[cfg_attr(test, mockall::automock(type Record = crate::domain::post::entities::Post;))]
pub trait QueryRepository: Send + Sync {
    type Record;

    fn find_many(
        &self,
        descriptor: QueryDescriptor,
    ) -> impl Future<Output = Result<PaginatedResult<Self::Record>, CoreError>> + Send;

    fn count(
        &self,
        filters: Option<HashMap<String, FilterPredicate>>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
