//! Client-Side Routes
//!
//! Path ↔ page mapping. Navigation never round-trips to the server.

use percent_encoding::percent_decode_str;

/// Every page the site can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Careers,
    /// `/careers/:jobId/apply`
    JobApplication(String),
    Blog,
    /// `/blog/:slug`
    BlogPost(String),
    Contact,
    Portfolio,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["careers"] => Route::Careers,
            ["careers", job_id, "apply"] => Route::JobApplication(decode(job_id)),
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost(decode(slug)),
            ["contact"] => Route::Contact,
            ["portfolio"] => Route::Portfolio,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Careers => "/careers".to_string(),
            Route::JobApplication(job_id) => format!("/careers/{}/apply", job_id),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
            Route::Contact => "/contact".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Title for the browser tab
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Kamashka",
            Route::About => "About Us | Kamashka",
            Route::Careers | Route::JobApplication(_) => "Careers | Kamashka",
            Route::Blog | Route::BlogPost(_) => "Blog | Kamashka",
            Route::Contact => "Contact | Kamashka",
            Route::Portfolio => "Portfolio | Kamashka",
            Route::NotFound => "Page Not Found | Kamashka",
        }
    }
}

/// Undo `%XX` escapes left in a path segment by the browser
fn decode(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Top navigation entries
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Portfolio", "/portfolio"),
    ("Careers", "/careers"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/careers"), Route::Careers);
        assert_eq!(Route::parse("/careers/12/apply"), Route::JobApplication("12".into()));
        assert_eq!(Route::parse("/blog"), Route::Blog);
        assert_eq!(Route::parse("/blog/hello-rust?ref=home"), Route::BlogPost("hello-rust".into()));
        assert_eq!(Route::parse("/contact#form"), Route::Contact);
        assert_eq!(Route::parse("/portfolio"), Route::Portfolio);
        assert_eq!(Route::parse("/careers/12"), Route::NotFound);
        assert_eq!(Route::parse("/nope"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::About,
            Route::Careers,
            Route::JobApplication("7".into()),
            Route::Blog,
            Route::BlogPost("why-rust".into()),
            Route::Contact,
            Route::Portfolio,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(Route::parse("/blog/caf%C3%A9"), Route::BlogPost("café".into()));
        assert_eq!(Route::parse("/blog/100%"), Route::BlogPost("100%".into()));
    }
}
