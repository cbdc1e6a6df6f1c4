//! Form validation helpers. Client-side checks only give early UX feedback;
//! the backend remains the authority and its `422` responses are mapped back
//! into [`FieldErrors`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Maximum length produced by [`slugify`].
pub const MAX_SLUG_LENGTH: usize = 80;
/// Minimum password length enforced before hitting the API.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Field name to message map, ordered by field name for stable rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Records a message; the first message per field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Records `message` for `field` unless `ok` holds.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) {
        if !ok {
            self.insert(field, message);
        }
    }

    pub fn require(&mut self, field: &str, value: &str) {
        self.check(field, !value.trim().is_empty(), "This field is required.");
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        self.check(
            field,
            value.chars().count() <= max,
            &format!("Must be at most {max} characters."),
        );
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) {
        self.check(
            field,
            value.trim().chars().count() >= min,
            &format!("Must be at least {min} characters."),
        );
    }

    pub fn email(&mut self, field: &str, value: &str) {
        self.require(field, value);
        self.check(field, is_valid_email(value), "Enter a valid email address.");
    }

    pub fn slug(&mut self, field: &str, value: &str) {
        self.require(field, value);
        self.check(
            field,
            is_valid_slug(value),
            "Use lowercase letters, numbers and single dashes.",
        );
        self.max_len(field, value, MAX_SLUG_LENGTH);
    }

    /// Converts the collected errors into a validation result.
    ///
    /// # Errors
    /// Returns the collected errors when at least one field failed.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Implemented by every payload a form submits.
pub trait Validate {
    /// # Errors
    /// Returns the field errors that block submission.
    fn validate(&self) -> Result<(), FieldErrors>;
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email.trim()))
}

#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").is_ok_and(|re| re.is_match(slug))
}

/// Derives a URL slug from a title: lowercase ASCII alphanumerics separated by single dashes.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Password rules shared by registration and the admin user editor.
pub fn check_password(errors: &mut FieldErrors, password: &str, confirmation: Option<&str>) {
    errors.require("password", password);
    errors.check(
        "password",
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        &format!("Must be at least {MIN_PASSWORD_LENGTH} characters."),
    );
    if let Some(confirmation) = confirmation {
        errors.check(
            "password_confirmation",
            password == confirmation,
            "Passwords do not match.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Growth --- Strategy 2025 "), "growth-strategy-2025");
        assert_eq!(slugify("¡Diseño web!"), "dise-o-web");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn slugify_truncates_without_trailing_dash() {
        let title = format!("{} tail", "a".repeat(MAX_SLUG_LENGTH - 1));
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
        assert!(is_valid_slug(&slug));
    }

    #[test]
    fn slug_and_email_rules() {
        assert!(is_valid_slug("seo-audit"));
        assert!(is_valid_slug("a1"));
        assert!(!is_valid_slug("SEO"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("-leading"));
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example.com"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.email("email", "");
        assert_eq!(errors.get("email"), Some("This field is required."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn password_rules() {
        let mut errors = FieldErrors::default();
        check_password(&mut errors, "short", Some("different"));
        assert!(errors.get("password").is_some());
        assert_eq!(
            errors.get("password_confirmation"),
            Some("Passwords do not match.")
        );

        let mut ok = FieldErrors::default();
        check_password(&mut ok, "long-enough", Some("long-enough"));
        assert!(ok.into_result().is_ok());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FieldErrors::default();
        errors.insert("title", "is required");
        errors.insert("body", "is too short");
        assert_eq!(errors.to_string(), "body: is too short; title: is required");
    }
}
