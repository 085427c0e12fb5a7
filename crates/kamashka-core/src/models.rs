//! API Models
//!
//! Entities as rendered by the views. Optional display fields are
//! rehydrated with explicit fallbacks during deserialization so that the
//! views never null-check.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::display;

/// Title used when the server sends none
pub const UNTITLED: &str = "Untitled";

/// Image shown on blog cards without a featured image
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400";

/// Identifier that the API may send as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Blog post, as listed and as viewed on its own page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "optional_text")]
    pub slug: Option<String>,
    #[serde(default = "untitled", deserialize_with = "title_text")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub excerpt: Option<String>,
    /// Rich text (HTML)
    #[serde(default, deserialize_with = "text_or_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    /// Author reference; may be an id or a name depending on the endpoint
    #[serde(default, deserialize_with = "optional_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub featured_image: Option<String>,
}

impl BlogPost {
    /// Path segment used in `/blog/:slug` links: slug, else id
    pub fn route_key(&self) -> Option<String> {
        self.slug.clone().or_else(|| self.id.as_ref().map(ItemId::to_string))
    }

    /// Author name shown under the post
    pub fn byline(&self) -> Option<&str> {
        self.author_name.as_deref().or(self.author.as_deref())
    }

    /// Publication date formatted for display, falling back to creation date
    pub fn display_date(&self) -> Option<String> {
        self.published_date
            .as_deref()
            .or(self.created_at.as_deref())
            .map(display::format_long_date)
    }

    /// Card summary: excerpt, else the content without markup
    pub fn summary(&self, max_chars: usize) -> String {
        let text = match &self.excerpt {
            Some(excerpt) => excerpt.clone(),
            None => display::strip_html(&self.content),
        };
        display::truncate_text(&text, max_chars)
    }

    pub fn image_or_placeholder(&self) -> &str {
        self.featured_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Job posting, as listed on the careers page and shown on the application page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default = "untitled", deserialize_with = "title_text")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub department: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub employment_type: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub salary_range: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub description: String,
}

impl JobPosting {
    pub fn employment_type_label(&self) -> String {
        display::employment_type_label(&self.employment_type)
    }
}

/// A picked file, read fully into memory
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime_type = mime_type.into();
        Self {
            file_name: file_name.into(),
            mime_type: if mime_type.is_empty() {
                "application/octet-stream".to_string()
            } else {
                mime_type
            },
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Reply of the contact endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContactReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "optional_text")]
    pub error: Option<String>,
}

/// Reply of the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenReply {
    #[serde(rename = "csrfToken", default, deserialize_with = "optional_text")]
    pub csrf_token: Option<String>,
}

// ========================
// Falsy-value fallbacks
// ========================

fn untitled() -> String {
    UNTITLED.to_string()
}

/// Scalars become text; null, empty strings and containers become `None`
fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Option::<Value>::deserialize(d)?))
}

fn text_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(scalar_text(Option::<Value>::deserialize(d)?).unwrap_or_default())
}

fn title_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(scalar_text(Option::<Value>::deserialize(d)?).unwrap_or_else(untitled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_defaults() {
        let job: JobPosting = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(job.title, "Untitled");
        assert_eq!(job.department, "");
        assert_eq!(job.location, "");
        assert_eq!(job.employment_type, "");
        assert_eq!(job.id, Some(ItemId::Number(7)));
    }

    #[test]
    fn test_null_and_empty_are_defaulted() {
        let job: JobPosting = serde_json::from_value(json!({
            "title": "", "department": null, "location": "Cairo"
        }))
        .unwrap();
        assert_eq!(job.title, "Untitled");
        assert_eq!(job.department, "");
        assert_eq!(job.location, "Cairo");
    }

    #[test]
    fn test_blog_helpers() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": 3,
            "title": "Shipping Rust",
            "content": "<p>Hello <b>world</b></p>",
            "author": 12,
            "created_at": "2024-03-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(post.route_key().as_deref(), Some("3"));
        assert_eq!(post.byline(), Some("12"));
        assert_eq!(post.display_date().as_deref(), Some("March 5, 2024"));
        assert_eq!(post.summary(120), "Hello world");
        assert_eq!(post.image_or_placeholder(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_blog_prefers_slug_and_author_name() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": "abc", "slug": "hello-rust", "author": 4, "author_name": "Mona"
        }))
        .unwrap();
        assert_eq!(post.route_key().as_deref(), Some("hello-rust"));
        assert_eq!(post.byline(), Some("Mona"));
        assert_eq!(post.title, UNTITLED);
    }

    #[test]
    fn test_attachment_default_mime() {
        let file = Attachment::new("cv.pdf", "", vec![0; 4]);
        assert_eq!(file.mime_type, "application/octet-stream");
        assert_eq!(file.size(), 4);
    }
}
