//! Response Shapes
//!
//! The listing endpoints answer with a bare array, a paginated object, or
//! (on some endpoints) an object holding the list under an unknown key.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{total_pages_for, ListResult};
use crate::error::{ApiError, ApiResult};

/// A list response, tagged by the shape it arrived in
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `[item, ...]`
    Bare(Vec<Value>),
    /// `{"results": [item, ...], "count": n}`
    Paginated { results: Vec<Value>, count: Option<u64> },
    /// First array-valued member of an otherwise unknown object
    Scanned { key: String, items: Vec<Value> },
    Unrecognized,
}

impl ResponseShape {
    pub fn classify(value: Value) -> Self {
        let map = match value {
            Value::Array(items) => return ResponseShape::Bare(items),
            Value::Object(map) => map,
            _ => return ResponseShape::Unrecognized,
        };

        if let Some(Value::Array(results)) = map.get("results") {
            return ResponseShape::Paginated {
                results: results.clone(),
                count: map.get("count").and_then(Value::as_u64),
            };
        }

        // Members are scanned in document order (serde_json `preserve_order`)
        map.into_iter()
            .find_map(|(key, member)| match member {
                Value::Array(items) => Some(ResponseShape::Scanned { key, items }),
                _ => None,
            })
            .unwrap_or(ResponseShape::Unrecognized)
    }

    /// Decode the items; page count is only known for the paginated shape
    pub fn into_list<T: DeserializeOwned>(self) -> ApiResult<ListResult<T>> {
        match self {
            ResponseShape::Bare(items) => {
                Ok(ListResult { items: decode_items(items)?, total_pages: None })
            }
            ResponseShape::Paginated { results, count } => Ok(ListResult {
                items: decode_items(results)?,
                total_pages: count.map(total_pages_for),
            }),
            ResponseShape::Scanned { key, items } => {
                log::warn!("Unexpected list response shape; using array member `{}`", key);
                Ok(ListResult { items: decode_items(items)?, total_pages: None })
            }
            ResponseShape::Unrecognized => {
                Err(ApiError::UnexpectedShape("Expected an array of items".to_string()))
            }
        }
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> ApiResult<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert_eq!(ResponseShape::classify(json!([1])), ResponseShape::Bare(vec![json!(1)]));
        assert_eq!(
            ResponseShape::classify(json!({"count": 12, "next": null, "results": [1]})),
            ResponseShape::Paginated { results: vec![json!(1)], count: Some(12) }
        );
        assert_eq!(ResponseShape::classify(json!("oops")), ResponseShape::Unrecognized);
        assert_eq!(ResponseShape::classify(json!({"detail": "x"})), ResponseShape::Unrecognized);
    }

    #[test]
    fn test_scan_takes_first_array_in_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"meta": {"v": 1}, "jobs": [1, 2], "archived": [3]}"#).unwrap();
        let shape = ResponseShape::classify(value);
        assert_eq!(
            shape,
            ResponseShape::Scanned { key: "jobs".into(), items: vec![json!(1), json!(2)] }
        );
        let list: ListResult<u8> = shape.into_list().unwrap();
        assert_eq!(list.items, vec![1, 2]);
        assert_eq!(list.total_pages, None);
    }

    #[test]
    fn test_paginated_without_count() {
        let list: ListResult<u8> =
            ResponseShape::classify(json!({"results": [5]})).into_list().unwrap();
        assert_eq!(list.total_pages, None);
    }

    #[test]
    fn test_unrecognized_is_error() {
        let err = ResponseShape::Unrecognized.into_list::<u8>().unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }
}
