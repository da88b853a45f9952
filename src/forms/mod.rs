/// Form models, validation and submission
///
/// - Volunteer application (application.rs)
/// - Newsletter signup (newsletter.rs)
/// - HTTP client that delivers both to the external endpoints (client.rs)

pub mod application;
pub mod client;
pub mod newsletter;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose "looks like an email address" check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Answer to a yes/no radio question
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

/// Validation messages keyed by field, in the order they were found
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors<F> {
    errors: Vec<(F, &'static str)>,
}

impl<F> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F: Copy + PartialEq> FieldErrors<F> {
    pub fn push(&mut self, field: F, message: &'static str) {
        self.errors.push((field, message));
    }

    /// Message to show under `field`, if it failed
    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("your.email@example.com"));
        assert!(is_valid_email("  pwberry@syr.edu "));
        assert!(!is_valid_email("pwberry"));
        assert!(!is_valid_email("pw berry@syr.edu"));
        assert!(!is_valid_email("pwberry@syr"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_yes_no_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_field_errors_lookup() {
        let mut errors = FieldErrors::default();
        errors.push(1u8, "first");
        errors.push(3u8, "third");

        assert_eq!(errors.get(3), Some("third"));
        assert_eq!(errors.get(2), None);
        assert_eq!(errors.len(), 2);

        errors.clear();
        assert!(errors.is_empty());
    }
}
