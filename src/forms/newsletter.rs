/// Mailing-list signup on the News & Events page
use serde::Serialize;

use super::is_valid_email;

pub const SUCCESS_NOTICE: &str = "You've been added to our mailing list.";
pub const FAILURE_NOTICE: &str = "We couldn't add you to the mailing list. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterForm {
    pub name: String,
    pub email: String,
}

/// JSON body POSTed to the newsletter endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
}

impl NewsletterForm {
    /// Both fields are required and the email must look like one
    pub fn validate(&self) -> Result<SignupPayload, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() || email.is_empty() {
            return Err("Please fill in all fields");
        }
        if !is_valid_email(email) {
            return Err("Please enter a valid email address");
        }

        Ok(SignupPayload {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_both_fields() {
        let form = NewsletterForm {
            name: "Jackie".to_string(),
            email: "   ".to_string(),
        };
        assert_eq!(form.validate(), Err("Please fill in all fields"));

        let form = NewsletterForm {
            name: String::new(),
            email: "jackie@example.com".to_string(),
        };
        assert_eq!(form.validate(), Err("Please fill in all fields"));
    }

    #[test]
    fn test_rejects_bad_email() {
        let form = NewsletterForm {
            name: "Jackie".to_string(),
            email: "jackie".to_string(),
        };
        assert_eq!(form.validate(), Err("Please enter a valid email address"));
    }

    #[test]
    fn test_valid_signup() {
        let mut form = NewsletterForm {
            name: " Jackie ".to_string(),
            email: "jackie@example.com".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Jackie");

        form.reset();
        assert_eq!(form, NewsletterForm::default());
    }
}
