//! Display Helpers
//!
//! Formatting shared by the list and detail views.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format an API date as `March 5, 2024`.
///
/// Accepts RFC 3339 timestamps, naive timestamps and plain `YYYY-MM-DD`;
/// anything else is returned unchanged.
pub fn format_long_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Drop markup tags and collapse whitespace
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Human label for an `employment_type` code
pub fn employment_type_label(code: &str) -> String {
    match code {
        "full_time" => "Full Time".to_string(),
        "part_time" => "Part Time".to_string(),
        "contract" => "Contract".to_string(),
        "internship" => "Internship".to_string(),
        "" => "—".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-05T10:00:00Z"), "March 5, 2024");
        assert_eq!(format_long_date("2023-12-25T23:10:00+02:00"), "December 25, 2023");
        assert_eq!(format_long_date("2024-11-30T08:00:00.123456"), "November 30, 2024");
        assert_eq!(format_long_date("2022-01-09"), "January 9, 2022");
        assert_eq!(format_long_date("soon"), "soon");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("مرحبا بالعالم", 5), "مرحبا...");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Fish &amp; chips</p>\n<p>daily</p>"), "Fish & chips daily");
    }

    #[test]
    fn test_employment_type_label() {
        assert_eq!(employment_type_label("full_time"), "Full Time");
        assert_eq!(employment_type_label("internship"), "Internship");
        assert_eq!(employment_type_label("freelance"), "freelance");
        assert_eq!(employment_type_label(""), "—");
    }
}
