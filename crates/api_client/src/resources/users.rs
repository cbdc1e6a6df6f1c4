//! User accounts (back office) and the signed-in customer's profile.

use super::Collection;
use crate::{
    forms::{check_password, FieldErrors, Validate},
    ApiClient, Error,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Self::Customer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name for greetings, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
    /// Required when creating; optional on update (blank keeps the current password).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            is_active: user.is_active,
            password: None,
        }
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.email("email", &self.email);
        if let Some(password) = &self.password {
            check_password(&mut errors, password, None);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            company: profile.company.clone(),
            phone: profile.phone.clone(),
        }
    }
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if let Some(name) = &self.full_name {
            errors.max_len("full_name", name, 120);
        }
        if let Some(company) = &self.company {
            errors.max_len("company", company, 120);
        }
        if let Some(phone) = &self.phone {
            errors.check(
                "phone",
                is_valid_phone(phone),
                "Enter a valid phone number.",
            );
        }
        errors.into_result()
    }
}

/// Digits with optional `+`, spaces, dashes, dots and parentheses; 7 to 15 digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    let allowed = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '.' | '(' | ')'));
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

impl ApiClient {
    #[must_use]
    pub fn users(&self) -> Collection<'_, User, UserDraft> {
        Collection::new(self, "/users")
    }

    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn profile(&self) -> Result<Profile, Error> {
        self.get("/profile").await
    }

    /// # Errors
    /// Returns `Error::Validation` for invalid input, otherwise the backend's error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, Error> {
        update.validate()?;
        self.put("/profile", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User {
            id: "1".to_string(),
            email: "ana@example.com".to_string(),
            full_name: Some("  ".to_string()),
            role: Role::Customer,
            is_active: true,
            created_at: None,
        };
        assert_eq!(user.display_name(), "ana@example.com");
        user.full_name = Some("Ana Ruiz".to_string());
        assert_eq!(user.display_name(), "Ana Ruiz");
        assert!(!user.is_admin());
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("+1 (555) 010-2030"));
        assert!(is_valid_phone("5550102"));
        assert!(!is_valid_phone("555"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn user_draft_checks_password_only_when_present() {
        let draft = UserDraft {
            email: "ops@consulta.dev".to_string(),
            role: Role::Admin,
            is_active: true,
            ..UserDraft::default()
        };
        assert!(draft.validate().is_ok());

        let weak = UserDraft {
            password: Some("short".to_string()),
            ..draft
        };
        assert!(weak.validate().is_err());
    }
}
