use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;
use std::collections::HashMap;

use super::value_objects::{
    DateFilter, FilterPredicate, QueryDescriptor, QueryOptions, RawParams, SortOrder,
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Keys consumed by pagination/sort/search handling; never treated as filters.
pub const RESERVED_KEYS: [&str; 5] = ["page", "limit", "search", "sortBy", "sortOrder"];

/// One filter-inference rule: a predicate over the raw `(key, value)` pair and
/// a builder producing the target field name and its filter. Rules are
/// evaluated in order, first match wins.
struct InferenceRule {
    matches: fn(&str, &Value) -> bool,
    build: fn(&str, &Value) -> (String, FilterPredicate),
}

static INFERENCE_RULES: &[InferenceRule] = &[
    // `emailDomain=x.com` -> email ends with "@x.com"
    InferenceRule {
        matches: |key, value| key.ends_with("Domain") && value.is_string(),
        build: |key, value| {
            let field = key.strip_suffix("Domain").unwrap_or(key).to_string();
            let suffix = format!("@{}", value.as_str().unwrap_or_default());
            (field, FilterPredicate::EndsWith(suffix))
        },
    },
    // `createdDate=2023-01-01` -> lower-bound date filter under the same key
    InferenceRule {
        matches: |key, value| key.contains("Date") && value.is_string(),
        build: |key, value| {
            let date = parse_date(value.as_str().unwrap_or_default());
            (key.to_string(), FilterPredicate::DateGte(date))
        },
    },
    // `tags=[a, b]` -> set membership
    InferenceRule {
        matches: |_, value| value.is_array(),
        build: |key, value| {
            let values = value.as_array().cloned().unwrap_or_default();
            (key.to_string(), FilterPredicate::In(values))
        },
    },
    // `authorName=John` -> case-insensitive substring match
    InferenceRule {
        matches: |key, value| value.is_string() && key.contains("Name"),
        build: |key, value| {
            let text = value.as_str().unwrap_or_default().to_string();
            (key.to_string(), FilterPredicate::ContainsInsensitive(text))
        },
    },
    // Everything else is plain equality.
    InferenceRule {
        matches: |_, _| true,
        build: |key, value| (key.to_string(), FilterPredicate::Equals(value.clone())),
    },
];

/// Integer coercion with `Number(x) || default` semantics, kept as a
/// documented contract: missing keys, non-numeric values and an explicit `0`
/// all yield the default, while negative values pass through untouched.
pub fn int_or(value: Option<&Value>, default: i64) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    };

    match parsed {
        Some(0) | None => default,
        Some(n) => n,
    }
}

/// Best-effort date parsing. Accepts RFC 3339 timestamps and plain
/// `YYYY-MM-DD` dates (taken as midnight UTC); anything else becomes the
/// invalid sentinel, forwarded for the repository to judge.
pub fn parse_date(raw: &str) -> DateFilter {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return DateFilter::Valid(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return DateFilter::Valid(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    DateFilter::Invalid(raw.to_string())
}

fn infer_filters(raw: &RawParams) -> HashMap<String, FilterPredicate> {
    let mut filters = HashMap::new();

    for (key, value) in raw {
        if RESERVED_KEYS.contains(&key.as_str()) || value.is_null() {
            continue;
        }
        for rule in INFERENCE_RULES {
            if (rule.matches)(key, value) {
                let (field, predicate) = (rule.build)(key, value);
                filters.insert(field, predicate);
                break;
            }
        }
    }

    filters
}

/// Maps raw, loosely typed parameters into a normalized [`QueryDescriptor`].
/// Pure and deterministic; performs no I/O and never fails.
pub fn translate(raw: &RawParams, options: QueryOptions) -> QueryDescriptor {
    let QueryOptions {
        default_sort,
        search_fields,
        relations,
        custom_filters,
    } = options;

    let page = int_or(raw.get("page"), DEFAULT_PAGE);
    let limit = match int_or(raw.get("limit"), DEFAULT_LIMIT) {
        l if l > 0 => l.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    };

    let sort_by = match raw.get("sortBy") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default_sort.field,
    };
    let sort_order = raw
        .get("sortOrder")
        .and_then(Value::as_str)
        .and_then(SortOrder::from_raw)
        .unwrap_or(default_sort.order);

    // An empty search string is still a search; only absent/null is not.
    let search = match raw.get("search") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    let mut filters = infer_filters(raw);
    filters.extend(custom_filters);

    QueryDescriptor {
        page,
        limit,
        search,
        search_fields: (!search_fields.is_empty()).then_some(search_fields),
        sort_by,
        sort_order,
        relations,
        custom_filters: filters,
    }
}
