use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Open, loosely typed parameter map supplied by callers. Keys are not known
/// in advance; filter semantics are inferred from them at translation time.
pub type RawParams = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Default sort applied when the raw parameters carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: "createdAt".to_string(),
            order: SortOrder::Desc,
        }
    }
}

/// Lower-bound date filter value. Unparseable inputs are carried through as
/// a sentinel instead of failing translation; the repository decides whether
/// to reject them.
#[derive(Debug, Clone, PartialEq)]
pub enum DateFilter {
    Valid(DateTime<Utc>),
    Invalid(String),
}

/// A typed condition applied to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    Equals(Value),
    EndsWith(String),
    DateGte(DateFilter),
    In(Vec<Value>),
    ContainsInsensitive(String),
}

/// Normalized, storage-agnostic list query handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescriptor {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    /// `None` means no free-text search is configured; never `Some(vec![])`.
    pub search_fields: Option<Vec<String>>,
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Relation paths to eager-load, dot-separated for nesting. An empty list
    /// is forwarded as-is, unlike `search_fields`.
    pub relations: Vec<String>,
    pub custom_filters: HashMap<String, FilterPredicate>,
}

/// Caller-supplied translation options: domain defaults that shape the
/// descriptor alongside the raw parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub default_sort: SortSpec,
    pub search_fields: Vec<String>,
    pub relations: Vec<String>,
    /// Caller-declared filters; these win over inferred ones on key collision.
    pub custom_filters: HashMap<String, FilterPredicate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: u64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}
