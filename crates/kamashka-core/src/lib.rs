//! Kamashka Core
//!
//! Framework-agnostic orchestration layer behind the site's pages:
//! - config: explicit API configuration
//! - http: transport seam and reqwest implementation
//! - client: one method per backend endpoint
//! - csrf: anti-forgery token state
//! - validation / contact / application / wizard: form drafts and submission gating
//! - listing / scope: filtered list fetching, response normalization, stale-response guard
//! - display: formatting helpers shared by the views

pub mod application;
pub mod client;
pub mod config;
pub mod contact;
pub mod csrf;
pub mod display;
pub mod error;
pub mod http;
pub mod listing;
pub mod models;
pub mod scope;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod testing;

pub use application::{
    ApplicationDraft, ApplicationField, ApplicationForm, ApplicationStep, ApplicationSubmission,
    Attachment, REDIRECT_DELAY,
};
pub use client::SiteApi;
pub use config::SiteConfig;
pub use contact::{ContactDraft, ContactField, ContactForm, ContactSubmission};
pub use csrf::CsrfToken;
pub use error::{ApiError, ApiResult, SubmitBlocked};
pub use http::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
pub use listing::{FilterState, ListResult, ListState, ResponseShape, PAGE_SIZE};
pub use models::{BlogPost, ItemId, JobPosting};
pub use scope::{Ticket, ViewScope};
pub use validation::FormErrors;
pub use wizard::Wizard;

/// Outcome of the most recent submission attempt, rendered as an inline alert
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    /// Nothing submitted yet (or the alert was reset by a new attempt)
    #[default]
    Idle,
    /// The server accepted the submission
    Succeeded,
    /// The attempt failed; carries the user-facing message
    Failed(String),
}

impl SubmitStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitStatus::Succeeded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
