/// Volunteer application for the editorial team
///
/// `ApplicationForm` holds what the user typed. `validate()` either returns
/// the JSON body for the spreadsheet endpoint or the per-field messages to
/// show under each input.
use serde::Serialize;
use std::path::PathBuf;

use super::{is_valid_email, FieldErrors, YesNo};
use crate::error::SiteError;

pub const SUCCESS_NOTICE: &str = "Application submitted successfully!";
const REJECTED_NOTICE: &str = "Error submitting application.";
const FAILED_NOTICE: &str = "Something went wrong submitting your application.";

const MIN_INTEREST_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    Impacted,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Over18,
    Interest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    /// Impacted by the criminal justice system?
    pub impacted: Option<YesNo>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub over18: Option<YesNo>,
    /// Why the applicant is interested (at least 10 characters)
    pub interest: String,
    /// Optional inline writing sample
    pub sample_writing: String,
    /// Files picked for upload; read when the application is sent
    pub files: Vec<PathBuf>,
}

/// An uploaded file as the endpoint expects it
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub file_name: String,
    pub content: String,
}

/// JSON body POSTed to the application endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub impacted: YesNo,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub over18: YesNo,
    pub interest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_writing: Option<String>,
    pub files: Vec<Attachment>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field; attachments are left empty in the payload
    pub fn validate(&self) -> Result<ApplicationPayload, FieldErrors<ApplicationField>> {
        let mut errors = FieldErrors::default();

        if self.impacted.is_none() {
            errors.push(ApplicationField::Impacted, "Please select an option");
        }
        require(&mut errors, ApplicationField::FirstName, &self.first_name, "First name is required");
        require(&mut errors, ApplicationField::LastName, &self.last_name, "Last name is required");
        if !is_valid_email(&self.email) {
            errors.push(ApplicationField::Email, "Invalid email address");
        }
        require(&mut errors, ApplicationField::Phone, &self.phone, "Phone number is required");
        require(&mut errors, ApplicationField::Address, &self.address, "Address is required");
        if self.over18.is_none() {
            errors.push(ApplicationField::Over18, "Please select an option");
        }
        if self.interest.trim().chars().count() < MIN_INTEREST_CHARS {
            errors.push(
                ApplicationField::Interest,
                "Please provide at least 10 characters",
            );
        }

        let (Some(impacted), Some(over18), true) = (self.impacted, self.over18, errors.is_empty())
        else {
            return Err(errors);
        };

        let sample_writing = self.sample_writing.trim();

        Ok(ApplicationPayload {
            impacted,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            over18,
            interest: self.interest.trim().to_string(),
            sample_writing: (!sample_writing.is_empty()).then(|| sample_writing.to_string()),
            files: Vec::new(),
        })
    }

    /// Clear every field after a successful submission
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl ApplicationPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What to tell the applicant when sending failed
pub fn failure_notice(err: &SiteError) -> &'static str {
    match err {
        SiteError::Rejected { .. } => REJECTED_NOTICE,
        _ => FAILED_NOTICE,
    }
}

fn require(
    errors: &mut FieldErrors<ApplicationField>,
    field: ApplicationField,
    value: &str,
    message: &'static str,
) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ApplicationForm {
        ApplicationForm {
            impacted: Some(YesNo::Yes),
            first_name: "Ilhy".to_string(),
            last_name: " Gomez ".to_string(),
            email: "ilhy@example.com".to_string(),
            phone: "315-555-0100".to_string(),
            address: "447 S. Salina St., Syracuse, NY".to_string(),
            over18: Some(YesNo::Yes),
            interest: "I want to help edit the journal.".to_string(),
            sample_writing: String::new(),
            files: Vec::new(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ApplicationForm::new().validate().unwrap_err();

        assert_eq!(errors.len(), 8);
        assert_eq!(errors.get(ApplicationField::Impacted), Some("Please select an option"));
        assert_eq!(errors.get(ApplicationField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(ApplicationField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(ApplicationField::Email), Some("Invalid email address"));
        assert_eq!(errors.get(ApplicationField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(ApplicationField::Address), Some("Address is required"));
        assert_eq!(errors.get(ApplicationField::Over18), Some("Please select an option"));
        assert_eq!(
            errors.get(ApplicationField::Interest),
            Some("Please provide at least 10 characters")
        );
    }

    #[test]
    fn test_short_interest_rejected() {
        let mut form = filled();
        form.interest = "  writing  ".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(ApplicationField::Interest).is_some());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut form = filled();
        form.email = "ilhy.example.com".to_string();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(ApplicationField::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_valid_form_trims_fields() {
        let payload = filled().validate().unwrap();

        assert_eq!(payload.last_name, "Gomez");
        assert_eq!(payload.sample_writing, None);
        assert!(payload.files.is_empty());
    }

    #[test]
    fn test_payload_json_shape() {
        let mut form = filled();
        form.over18 = Some(YesNo::No);
        form.sample_writing = "A poem.".to_string();

        let mut payload = form.validate().unwrap();
        payload.files.push(Attachment {
            file_name: "poem.txt".to_string(),
            content: "Freedom is...".to_string(),
        });

        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["impacted"], "yes");
        assert_eq!(json["over18"], "no");
        assert_eq!(json["firstName"], "Ilhy");
        assert_eq!(json["sampleWriting"], "A poem.");
        assert_eq!(json["files"][0]["fileName"], "poem.txt");
        assert_eq!(json["files"][0]["content"], "Freedom is...");
    }

    #[test]
    fn test_reset_clears_form() {
        let mut form = filled();
        form.files.push(PathBuf::from("/tmp/poem.txt"));
        form.reset();
        assert_eq!(form, ApplicationForm::default());
    }

    #[test]
    fn test_failure_notices() {
        assert_eq!(
            failure_notice(&SiteError::Rejected { status: 500 }),
            "Error submitting application."
        );
        assert_eq!(
            failure_notice(&SiteError::InvalidConfig("x".to_string())),
            "Something went wrong submitting your application."
        );
    }
}
