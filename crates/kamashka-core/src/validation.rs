//! Form Validation
//!
//! Pure rules over drafts. A form is valid exactly when its error map is empty.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Field → human-readable message, only for fields currently failing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    entries: BTreeMap<F, String>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    /// Drop one field's entry; called the moment that field is edited
    pub fn clear(&mut self, field: F) {
        self.entries.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

/// Empty after trimming surrounding whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Coarse check: something, `@`, something, `.`, something
pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Record `message` for `field` when the value is blank
pub fn require<F: Ord + Copy>(errors: &mut FormErrors<F>, field: F, value: &str, message: &str) {
    if is_blank(value) {
        errors.insert(field, message);
    }
}

/// Required email: `missing` when blank, `invalid` when it fails the pattern
pub fn require_email<F: Ord + Copy>(
    errors: &mut FormErrors<F>,
    field: F,
    value: &str,
    missing: &str,
    invalid: &str,
) {
    if is_blank(value) {
        errors.insert(field, missing);
    } else if !is_email(value) {
        errors.insert(field, invalid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_email("a@b.c"));
        assert!(is_email("first.last@kamashka.com"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email(""));
        assert!(!is_email("a@b"));
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_require_email_messages() {
        let mut errors = FormErrors::new();
        require_email(&mut errors, 1u8, "  ", "missing", "invalid");
        require_email(&mut errors, 2u8, "nope", "missing", "invalid");
        require_email(&mut errors, 3u8, "x@y.z", "missing", "invalid");
        assert_eq!(errors.get(1), Some("missing"));
        assert_eq!(errors.get(2), Some("invalid"));
        assert!(!errors.contains(3));
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = FormErrors::new();
        errors.insert('a', "A");
        errors.insert('b', "B");
        errors.clear('a');
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!['b']);
    }
}
