//! Query-string construction and page → `limit`/`offset` translation.

use serde::Serialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};

/// Ordered list of query-string key/value pairs.
pub type QueryPairs = Vec<(String, String)>;

/// Record window requested from a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u64,
}

impl Pagination {
    /// Window for a 1-based page number. Page 0 is treated as page 1.
    pub fn for_page(page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        Self {
            limit: page_size,
            offset: u64::from(page - 1) * u64::from(page_size),
        }
    }
}

/// Flatten a serializable query object into query-string pairs.
///
/// `null` fields are omitted, arrays become repeated keys and booleans are
/// rendered as `true`/`false`. Nested objects are rejected.
pub fn to_query_pairs<Q: Serialize + ?Sized>(query: &Q) -> ApiResult<QueryPairs> {
    let value = serde_json::to_value(query)
        .map_err(|e| ApiError::InvalidParameter(format!("Failed to serialize query: {}", e)))?;

    let map = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(ApiError::InvalidParameter(format!(
                "Query must serialize to an object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = render_scalar(&key, item)? {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_scalar(&key, other)? {
                    pairs.push((key, rendered));
                }
            }
        }
    }
    Ok(pairs)
}

fn render_scalar(key: &str, value: Value) -> ApiResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Array(_) | Value::Object(_) => Err(ApiError::InvalidParameter(format!(
            "Query field '{}' must be a scalar or a list of scalars",
            key
        ))),
    }
}

/// Whether `key` is already present.
pub fn has_key(pairs: &[(String, String)], key: &str) -> bool {
    pairs.iter().any(|(k, _)| k == key)
}

/// Append `key=value` unless the caller already set `key`.
pub fn insert_default(pairs: &mut QueryPairs, key: &str, value: impl ToString) {
    if !has_key(pairs, key) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

/// Add `limit`/`offset` for `page`, keeping any explicit values.
pub fn apply_pagination(pairs: &mut QueryPairs, page: u32, page_size: u32) {
    let window = Pagination::for_page(page, page_size);
    insert_default(pairs, "limit", window.limit);
    insert_default(pairs, "offset", window.offset);
}

/// Render pairs as `a=1&b=2` (no leading `?`).
pub fn encode(pairs: &[(String, String)]) -> ApiResult<String> {
    serde_urlencoded::to_string(pairs)
        .map_err(|e| ApiError::InvalidParameter(format!("Failed to encode query: {}", e)))
}
