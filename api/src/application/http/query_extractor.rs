use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use quillbox_core::domain::query::value_objects::RawParams;
use serde_json::Value;

/// Extractor that hands the whole query string to the handler as an open
/// parameter map, so listing endpoints accept arbitrary filter keys next to
/// the reserved pagination ones.
///
/// Repeated keys collapse into arrays, `true`/`false` become booleans, and
/// integer literals become numbers. Everything else stays a string.
#[derive(Debug, Clone)]
pub struct RawQueryParams(pub RawParams);

impl<S> FromRequestParts<S> for RawQueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(RawQueryParams(raw_params_from_pairs(pairs)))
    }
}

pub fn raw_params_from_pairs(pairs: Vec<(String, String)>) -> RawParams {
    let mut raw = RawParams::new();
    for (key, value) in pairs {
        let scalar = coerce_scalar(&value);
        match raw.remove(&key) {
            Some(Value::Array(mut items)) => {
                items.push(scalar);
                raw.insert(key, Value::Array(items));
            }
            Some(existing) => {
                raw.insert(key, Value::Array(vec![existing, scalar]));
            }
            None => {
                raw.insert(key, scalar);
            }
        }
    }
    raw
}

fn coerce_scalar(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => value
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(value.to_string())),
    }
}
