//! Public contact form.

use super::users::is_valid_phone;
use crate::{
    forms::{FieldErrors, Validate},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};

pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_interest: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Trims every field and turns blank optional fields into `None`.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional(self.company),
            phone: optional(self.phone),
            service_interest: optional(self.service_interest),
            message: self.message.trim().to_string(),
        }
    }
}

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name);
        errors.max_len("name", &self.name, 120);
        errors.email("email", &self.email);
        if let Some(phone) = &self.phone {
            errors.check("phone", is_valid_phone(phone), "Enter a valid phone number.");
        }
        errors.require("message", &self.message);
        errors.min_len("message", &self.message, MIN_MESSAGE_LENGTH);
        errors.max_len("message", &self.message, MAX_MESSAGE_LENGTH);
        errors.into_result()
    }
}

impl ApiClient {
    /// Sends a contact request after normalizing and validating it.
    ///
    /// # Errors
    /// Returns `Error::Validation` for invalid input, otherwise the backend's error.
    pub async fn submit_contact(&self, request: ContactRequest) -> Result<(), Error> {
        let request = request.normalized();
        request.validate()?;
        self.post_no_content("/contact", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_drops_blank_optionals() {
        let request = ContactRequest {
            name: "  Ana ".to_string(),
            email: " ana@example.com ".to_string(),
            company: Some("   ".to_string()),
            phone: None,
            service_interest: Some(" seo ".to_string()),
            message: " Need help with our launch. ".to_string(),
        }
        .normalized();

        assert_eq!(request.name, "Ana");
        assert_eq!(request.company, None);
        assert_eq!(request.service_interest.as_deref(), Some("seo"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn short_message_is_rejected() {
        let request = ContactRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hi".to_string(),
            ..ContactRequest::default()
        };
        let Err(errors) = request.validate() else {
            panic!("expected errors");
        };
        assert_eq!(
            errors.get("message"),
            Some("Must be at least 10 characters.")
        );
    }
}
