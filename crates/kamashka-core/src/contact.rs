//! Contact Form
//!
//! Draft, validation and submission gating for the contact page. The async
//! part lives in `SiteApi::submit_contact`; this module only decides whether
//! a request may be built and folds its outcome back into the form.

use serde::Serialize;

use crate::csrf::CsrfToken;
use crate::error::{ApiResult, SubmitBlocked, TOKEN_REFRESH_MESSAGE};
use crate::validation::{require, require_email, FormErrors};
use crate::SubmitStatus;

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! We will get back to you soon.";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "There was a problem sending your message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// All four fields are required; the email must also look like one
pub fn validate_contact(draft: &ContactDraft) -> FormErrors<ContactField> {
    let mut errors = FormErrors::new();
    require(&mut errors, ContactField::Name, &draft.name, "Name is required");
    require_email(
        &mut errors,
        ContactField::Email,
        &draft.email,
        "Email is required",
        "Email is invalid",
    );
    require(&mut errors, ContactField::Subject, &draft.subject, "Subject is required");
    require(&mut errors, ContactField::Message, &draft.message, "Message is required");
    errors
}

/// Everything needed to issue the contact POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub token: String,
    pub draft: ContactDraft,
}

/// State of one contact view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub errors: FormErrors<ContactField>,
    pub token: CsrfToken,
    pub status: SubmitStatus,
    pub submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&mut self, token: CsrfToken) {
        self.token = token;
    }

    /// Store a keystroke and drop that field's stale error
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Whether the send button is enabled
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.token.usable().is_some()
    }

    /// Validate and check the token; on success the form is marked in flight.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        self.errors = validate_contact(&self.draft);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }

        let Some(token) = self.token.usable().map(str::to_string) else {
            self.status = SubmitStatus::Failed(TOKEN_REFRESH_MESSAGE.to_string());
            return Err(SubmitBlocked::MissingToken);
        };

        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Ok(ContactSubmission { token, draft: self.draft.clone() })
    }

    /// Fold the POST outcome back in; success clears every field
    pub fn finish_submit(&mut self, outcome: ApiResult<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                self.draft = ContactDraft::default();
                self.errors = FormErrors::new();
            }
            Err(err) => {
                log::error!("Contact submission failed: {}", err);
                self.status = SubmitStatus::Failed(err.submit_message(CONTACT_FAILURE_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "A project".into(),
        }
    }

    #[test]
    fn test_each_blank_field_reported() {
        for field in ContactField::ALL {
            let mut draft = filled();
            draft.set(field, "   ".into());
            let errors = validate_contact(&draft);
            assert_eq!(errors.len(), 1, "{:?}", field);
            assert!(errors.contains(field));
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let draft = ContactDraft { email: "bad".into(), ..Default::default() };
        assert_eq!(validate_contact(&draft), validate_contact(&draft));
        assert_eq!(validate_contact(&draft).get(ContactField::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_edit_clears_only_that_error() {
        let mut form = ContactForm::new();
        form.set_token(CsrfToken::Ready("t".into()));
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(form.errors.len(), 4);

        form.set_field(ContactField::Name, "A".into());
        assert!(!form.errors.contains(ContactField::Name));
        assert_eq!(form.errors.len(), 3);
    }

    #[test]
    fn test_unavailable_token_blocks() {
        let mut form =
            ContactForm { draft: filled(), token: CsrfToken::Unavailable, ..Default::default() };
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::MissingToken));
        assert_eq!(form.status.error_message(), Some(TOKEN_REFRESH_MESSAGE));
        assert!(!form.submitting);
    }

    #[test]
    fn test_second_begin_is_inert() {
        let mut form = ContactForm {
            draft: filled(),
            token: CsrfToken::Ready("t".into()),
            ..Default::default()
        };
        assert!(form.begin_submit().is_ok());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = ContactForm {
            draft: filled(),
            token: CsrfToken::Ready("t".into()),
            ..Default::default()
        };
        form.begin_submit().unwrap();
        form.finish_submit(Err(ApiError::Transport("refused".into())));
        assert_eq!(form.status.error_message(), Some(CONTACT_FAILURE_MESSAGE));
        assert_eq!(form.draft, filled());
        assert!(form.can_submit());
    }
}
