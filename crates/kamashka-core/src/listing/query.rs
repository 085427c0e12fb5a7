//! Blog Filters
//!
//! Search text, category and author facets plus the 1-based page number.

/// Active filters of the blog list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    category: String,
    author: String,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            author: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    // Filter setters leave the page alone; callers reset it explicitly.

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Pages are 1-based; 0 is clamped to 1
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// `page` always, every other filter only when non-empty
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("page".to_string(), self.page.to_string())];
        for (name, value) in [
            ("search", &self.search),
            ("category", &self.category),
            ("author", &self.author),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((name.to_string(), value.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_default_query_is_page_only() {
        assert_eq!(FilterState::new().query_pairs(), vec![pair("page", "1")]);
    }

    #[test]
    fn test_non_empty_filters_only() {
        let mut filters = FilterState::new();
        filters.set_search("rust");
        filters.set_author("  ");
        filters.set_category("Engineering");
        filters.set_page(3);
        assert_eq!(
            filters.query_pairs(),
            vec![pair("page", "3"), pair("search", "rust"), pair("category", "Engineering")]
        );
    }

    #[test]
    fn test_filter_change_keeps_page() {
        let mut filters = FilterState::new();
        filters.set_page(4);
        filters.set_search("news");
        assert_eq!(filters.page(), 4);
        filters.reset_page();
        assert_eq!(filters.page(), 1);
        filters.set_page(0);
        assert_eq!(filters.page(), 1);
    }
}
