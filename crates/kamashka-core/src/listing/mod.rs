//! Listing
//!
//! Filtered, paginated GETs and the normalization of their responses into
//! one local shape.

mod query;
mod shape;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use query::FilterState;
pub use shape::ResponseShape;

/// Fixed server page size
pub const PAGE_SIZE: u64 = 10;

/// Number of pages needed for `count` items
pub fn total_pages_for(count: u64) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Items of one page plus the page count, when the server reported one
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    /// `None` when the response was a bare list without a count
    pub total_pages: Option<u32>,
}

impl<T> ListResult<T> {
    pub fn has_pagination(&self) -> bool {
        self.total_pages.is_some_and(|pages| pages > 1)
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total_pages: None }
    }
}

/// Parse a list response body, whichever shape it takes
pub fn normalize_list<T: DeserializeOwned>(body: &str) -> ApiResult<ListResult<T>> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    ResponseShape::classify(value).into_list()
}

/// Category facet values; null and empty entries are dropped
pub fn categories_from_value(value: Value) -> ApiResult<Vec<String>> {
    match value {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect()),
        _ => Err(ApiError::UnexpectedShape("Expected an array of categories".to_string())),
    }
}

/// What a list view renders: the current page, or an error in its place
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub total_pages: Option<u32>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total_pages: None, loading: true, error: None }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch was issued
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace the page wholesale, or clear it and keep the error
    pub fn apply(&mut self, outcome: ApiResult<ListResult<T>>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.items = result.items;
                self.total_pages = result.total_pages;
                self.error = None;
            }
            Err(err) => {
                log::error!("List fetch failed: {}", err);
                self.fail(err.user_message());
            }
        }
    }

    /// Surface an error for the whole view; the last one reported wins
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.items.clear();
        self.total_pages = None;
        self.error = Some(message);
    }

    pub fn has_pagination(&self) -> bool {
        self.total_pages.is_some_and(|pages| pages > 1)
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobPosting;
    use serde_json::json;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages_for(0), 0);
        assert_eq!(total_pages_for(10), 1);
        assert_eq!(total_pages_for(25), 3);
    }

    #[test]
    fn test_bare_array_has_unknown_pages() {
        let result: ListResult<String> = normalize_list(r#"["a","b"]"#).unwrap();
        assert_eq!(result.items, vec!["a", "b"]);
        assert_eq!(result.total_pages, None);
        assert!(!result.has_pagination());
    }

    #[test]
    fn test_paginated_page_count() {
        let result: ListResult<u32> = normalize_list(r#"{"results":[1,2,3],"count":25}"#).unwrap();
        assert_eq!(result.items, vec![1, 2, 3]);
        assert_eq!(result.total_pages, Some(3));
        assert!(result.has_pagination());
    }

    #[test]
    fn test_items_are_defaulted() {
        let body =
            json!({ "results": [{ "id": 1 }, { "id": 2, "title": "Engineer" }] }).to_string();
        let result: ListResult<JobPosting> = normalize_list(&body).unwrap();
        assert_eq!(result.items[0].title, "Untitled");
        assert_eq!(result.items[0].employment_type, "");
        assert_eq!(result.items[1].title, "Engineer");
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = normalize_list::<String>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_categories_filter_falsy() {
        let cats = categories_from_value(json!(["News", null, "", "Engineering"])).unwrap();
        assert_eq!(cats, vec!["News", "Engineering"]);
        assert!(categories_from_value(json!({"results": []})).is_err());
    }

    #[test]
    fn test_state_cleared_on_error() {
        let mut state = ListState::new();
        state.apply(Ok(ListResult { items: vec![1, 2], total_pages: Some(2) }));
        assert!(!state.loading);
        assert!(state.has_pagination());

        state.begin();
        state.apply(Err(ApiError::Transport("down".into())));
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, None);
        assert!(state.error.is_some());
        assert!(!state.is_empty());
    }
}
