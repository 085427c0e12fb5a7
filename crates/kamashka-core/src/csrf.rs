//! Anti-Forgery Token
//!
//! Fetched once per view mount, held in view-local state, and attached to
//! every mutating request as `X-CSRFToken`.

/// Token state of one view instance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CsrfToken {
    /// The token request has not resolved yet
    #[default]
    Pending,
    Ready(String),
    /// The single acquisition attempt failed; submissions are refused
    Unavailable,
}

impl CsrfToken {
    /// Build from a token endpoint value; blank values count as unavailable
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(token) if !token.trim().is_empty() => CsrfToken::Ready(token),
            _ => CsrfToken::Unavailable,
        }
    }

    /// The token to send, if a mutating request may be issued
    pub fn usable(&self) -> Option<&str> {
        match self {
            CsrfToken::Ready(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CsrfToken::Unavailable)
    }
}
