//! Job Application Wizard
//!
//! Three steps: personal information, resume upload, review & submit.
//! Forward moves are gated on the current step's fields; the multipart POST
//! can only be built from the last step.

use std::time::Duration;

use crate::csrf::CsrfToken;
use crate::error::{ApiResult, SubmitBlocked, TOKEN_REFRESH_MESSAGE};
use crate::http::MultipartField;
use crate::validation::{require, require_email, FormErrors};
use crate::wizard::Wizard;
use crate::SubmitStatus;

pub use crate::models::Attachment;

/// Delay between a successful submission and the redirect to the careers page
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

pub const APPLICATION_SUCCESS_MESSAGE: &str =
    "Application submitted successfully! Redirecting to careers...";
pub const APPLICATION_FAILURE_MESSAGE: &str = "Failed to submit application";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApplicationField {
    FullName,
    Email,
    Phone,
    Nationality,
    CoverLetter,
    Resume,
}

impl ApplicationField {
    /// Wire name of the multipart field
    pub fn name(&self) -> &'static str {
        match self {
            ApplicationField::FullName => "full_name",
            ApplicationField::Email => "email",
            ApplicationField::Phone => "phone",
            ApplicationField::Nationality => "nationality",
            ApplicationField::CoverLetter => "cover_letter",
            ApplicationField::Resume => "resume",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationField::FullName => "Full Name",
            ApplicationField::Email => "Email",
            ApplicationField::Phone => "Phone",
            ApplicationField::Nationality => "Nationality",
            ApplicationField::CoverLetter => "Cover Letter",
            ApplicationField::Resume => "Resume",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStep {
    PersonalInformation,
    ResumeUpload,
    ReviewSubmit,
}

pub const APPLICATION_STEPS: &[ApplicationStep] = &[
    ApplicationStep::PersonalInformation,
    ApplicationStep::ResumeUpload,
    ApplicationStep::ReviewSubmit,
];

impl ApplicationStep {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStep::PersonalInformation => "Personal Information",
            ApplicationStep::ResumeUpload => "Resume Upload",
            ApplicationStep::ReviewSubmit => "Review & Submit",
        }
    }

    /// Fields this step gates on
    pub fn required_fields(&self) -> &'static [ApplicationField] {
        match self {
            ApplicationStep::PersonalInformation => &[
                ApplicationField::FullName,
                ApplicationField::Email,
                ApplicationField::Phone,
                ApplicationField::Nationality,
            ],
            ApplicationStep::ResumeUpload => &[ApplicationField::Resume],
            ApplicationStep::ReviewSubmit => &[],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub cover_letter: String,
    pub resume: Option<Attachment>,
}

impl ApplicationDraft {
    /// Text value of a field; the resume reports its file name
    pub fn get(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::FullName => &self.full_name,
            ApplicationField::Email => &self.email,
            ApplicationField::Phone => &self.phone,
            ApplicationField::Nationality => &self.nationality,
            ApplicationField::CoverLetter => &self.cover_letter,
            ApplicationField::Resume => {
                self.resume.as_ref().map(|f| f.file_name.as_str()).unwrap_or("")
            }
        }
    }

    fn set_text(&mut self, field: ApplicationField, value: String) {
        match field {
            ApplicationField::FullName => self.full_name = value,
            ApplicationField::Email => self.email = value,
            ApplicationField::Phone => self.phone = value,
            ApplicationField::Nationality => self.nationality = value,
            ApplicationField::CoverLetter => self.cover_letter = value,
            ApplicationField::Resume => {}
        }
    }

    /// Label/value pairs shown on the review step
    pub fn review_rows(&self) -> Vec<(&'static str, String)> {
        [
            ApplicationField::FullName,
            ApplicationField::Email,
            ApplicationField::Phone,
            ApplicationField::Nationality,
            ApplicationField::CoverLetter,
            ApplicationField::Resume,
        ]
        .into_iter()
        .map(|field| (field.label(), self.get(field).to_string()))
        .collect()
    }
}

/// Errors for the fields owned by `step`
pub fn validate_step(
    step: ApplicationStep,
    draft: &ApplicationDraft,
) -> FormErrors<ApplicationField> {
    let mut errors = FormErrors::new();
    match step {
        ApplicationStep::PersonalInformation => {
            require(
                &mut errors,
                ApplicationField::FullName,
                &draft.full_name,
                "Full name is required",
            );
            require_email(
                &mut errors,
                ApplicationField::Email,
                &draft.email,
                "Email is required",
                "Invalid email format",
            );
            require(&mut errors, ApplicationField::Phone, &draft.phone, "Phone is required");
            require(
                &mut errors,
                ApplicationField::Nationality,
                &draft.nationality,
                "Nationality is required",
            );
        }
        ApplicationStep::ResumeUpload => {
            if draft.resume.is_none() {
                errors.insert(ApplicationField::Resume, "Resume is required");
            }
        }
        ApplicationStep::ReviewSubmit => {}
    }
    errors
}

/// Everything needed to issue the application POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub job_posting: String,
    pub token: String,
    pub draft: ApplicationDraft,
    pub resume: Attachment,
}

impl ApplicationSubmission {
    /// Multipart body: the posting id, every text field, then the resume
    pub fn multipart_fields(&self) -> Vec<MultipartField> {
        let text = |name: &str, value: &str| MultipartField::Text {
            name: name.to_string(),
            value: value.to_string(),
        };
        let draft = &self.draft;
        vec![
            text("job_posting", &self.job_posting),
            text(ApplicationField::FullName.name(), &draft.full_name),
            text(ApplicationField::Email.name(), &draft.email),
            text(ApplicationField::Phone.name(), &draft.phone),
            text(ApplicationField::Nationality.name(), &draft.nationality),
            text(ApplicationField::CoverLetter.name(), &draft.cover_letter),
            MultipartField::File {
                name: ApplicationField::Resume.name().to_string(),
                attachment: self.resume.clone(),
            },
        ]
    }
}

/// State of one application view
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationForm {
    pub job_id: String,
    pub wizard: Wizard<ApplicationStep>,
    pub draft: ApplicationDraft,
    pub errors: FormErrors<ApplicationField>,
    pub token: CsrfToken,
    pub status: SubmitStatus,
    pub submitting: bool,
}

impl ApplicationForm {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            wizard: Wizard::new(APPLICATION_STEPS),
            draft: ApplicationDraft::default(),
            errors: FormErrors::new(),
            token: CsrfToken::Pending,
            status: SubmitStatus::Idle,
            submitting: false,
        }
    }

    pub fn step(&self) -> ApplicationStep {
        self.wizard.current()
    }

    pub fn set_token(&mut self, token: CsrfToken) {
        self.token = token;
    }

    /// Store a text edit and drop that field's stale error
    pub fn set_field(&mut self, field: ApplicationField, value: String) {
        self.draft.set_text(field, value);
        self.errors.clear(field);
    }

    /// Store (or remove) the picked resume file
    pub fn set_resume(&mut self, file: Option<Attachment>) {
        self.draft.resume = file;
        self.errors.clear(ApplicationField::Resume);
    }

    /// The picked file could not be read; forget any earlier pick
    pub fn reject_resume(&mut self, message: impl Into<String>) {
        self.draft.resume = None;
        self.errors.insert(ApplicationField::Resume, message);
    }

    /// Validate the current step and move forward if it passes
    pub fn advance(&mut self) -> bool {
        self.errors = validate_step(self.step(), &self.draft);
        if !self.errors.is_empty() {
            return false;
        }
        self.wizard.advance()
    }

    /// Move back; never validates or clears anything
    pub fn back(&mut self) -> bool {
        self.wizard.back()
    }

    pub fn can_submit(&self) -> bool {
        self.wizard.is_last()
            && !self.submitting
            && !self.status.is_success()
            && self.token.usable().is_some()
    }

    /// Gate the final POST; on success the form is marked in flight.
    pub fn begin_submit(&mut self) -> Result<ApplicationSubmission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        // One application per form; the view navigates away after success
        if self.status.is_success() {
            return Err(SubmitBlocked::AlreadySubmitted);
        }
        if !self.wizard.is_last() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }

        self.errors = validate_step(self.step(), &self.draft);
        let Some(resume) = self.draft.resume.clone() else {
            self.errors.insert(ApplicationField::Resume, "Resume is required");
            return Err(SubmitBlocked::Invalid);
        };
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }

        let Some(token) = self.token.usable().map(str::to_string) else {
            self.status = SubmitStatus::Failed(TOKEN_REFRESH_MESSAGE.to_string());
            return Err(SubmitBlocked::MissingToken);
        };

        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Ok(ApplicationSubmission {
            job_posting: self.job_id.clone(),
            token,
            draft: self.draft.clone(),
            resume,
        })
    }

    /// Fold the POST outcome back in
    pub fn finish_submit(&mut self, outcome: ApiResult<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.status = SubmitStatus::Succeeded,
            Err(err) => {
                log::error!("Application submission failed: {}", err);
                self.status = SubmitStatus::Failed(err.submit_message(APPLICATION_FAILURE_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn personal(form: &mut ApplicationForm) {
        form.set_field(ApplicationField::FullName, "Ada Lovelace".into());
        form.set_field(ApplicationField::Email, "ada@example.com".into());
        form.set_field(ApplicationField::Phone, "+20 100 000 0000".into());
        form.set_field(ApplicationField::Nationality, "Egyptian".into());
    }

    fn resume() -> Attachment {
        Attachment::new("cv.pdf", "application/pdf", b"%PDF".to_vec())
    }

    #[test]
    fn test_personal_step_gates() {
        let mut form = ApplicationForm::new("4");
        assert!(!form.advance());
        assert_eq!(form.wizard.index(), 0);
        let fields: Vec<_> = form.errors.fields().collect();
        assert_eq!(fields, ApplicationStep::PersonalInformation.required_fields());

        personal(&mut form);
        assert!(form.advance());
        assert_eq!(form.step(), ApplicationStep::ResumeUpload);
    }

    #[test]
    fn test_resume_step_requires_file() {
        let mut form = ApplicationForm::new("4");
        personal(&mut form);
        form.advance();

        assert!(!form.advance());
        assert_eq!(form.step(), ApplicationStep::ResumeUpload);
        assert_eq!(form.errors.get(ApplicationField::Resume), Some("Resume is required"));

        form.set_resume(Some(resume()));
        assert!(form.errors.is_empty());
        assert!(form.advance());
        assert_eq!(form.step(), ApplicationStep::ReviewSubmit);
    }

    #[test]
    fn test_unreadable_resume_clears_pick() {
        let mut form = ApplicationForm::new("4");
        form.set_resume(Some(resume()));
        form.reject_resume("Could not read the selected file");
        assert_eq!(form.draft.resume, None);
        assert_eq!(form.draft.get(ApplicationField::Resume), "");
        assert!(form.errors.contains(ApplicationField::Resume));
    }

    #[test]
    fn test_back_keeps_state() {
        let mut form = ApplicationForm::new("4");
        personal(&mut form);
        form.advance();
        form.advance();
        assert!(form.back());
        assert_eq!(form.step(), ApplicationStep::PersonalInformation);
        assert_eq!(form.errors.get(ApplicationField::Resume), Some("Resume is required"));
        assert_eq!(form.draft.full_name, "Ada Lovelace");
        assert!(!form.back());
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut form = ApplicationForm::new("4");
        form.set_token(CsrfToken::Ready("t".into()));
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::NotOnFinalStep));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_begin_submit_builds_multipart() {
        let mut form = ApplicationForm::new("4");
        form.set_token(CsrfToken::Ready("t".into()));
        personal(&mut form);
        form.advance();
        form.set_resume(Some(resume()));
        form.advance();

        let submission = form.begin_submit().unwrap();
        assert!(form.submitting);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        let fields = submission.multipart_fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(
            fields[0],
            MultipartField::Text { name: "job_posting".into(), value: "4".into() }
        );
        assert!(matches!(&fields[6], MultipartField::File { name, .. } if name == "resume"));
    }

    #[test]
    fn test_success_is_final() {
        let mut form = ApplicationForm::new("4");
        form.set_token(CsrfToken::Ready("t".into()));
        personal(&mut form);
        form.advance();
        form.set_resume(Some(resume()));
        form.advance();

        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        assert!(!form.submitting);
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitted));
    }

    #[test]
    fn test_server_errors_surface() {
        let mut form = ApplicationForm::new("4");
        form.submitting = true;
        form.finish_submit(Err(ApiError::FieldErrors("Enter a valid email address.".into())));
        assert_eq!(form.status.error_message(), Some("Enter a valid email address."));
        assert!(!form.submitting);

        form.finish_submit(Err(ApiError::Timeout));
        assert_eq!(form.status.error_message(), Some(APPLICATION_FAILURE_MESSAGE));
    }
}
