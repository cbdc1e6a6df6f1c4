use crate::{
    forms::FieldErrors,
    i18n::{status_message, Locale, Message},
};
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Errors surfaced by the client. Variants carry strings so they stay `Clone`
/// and can live inside UI signals.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Session expired or credentials rejected")]
    Unauthorized,
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl Error {
    /// HTTP status associated with the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::Validation(_) => Some(422),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Field errors for inline form display, empty for other variants.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Validation(errors) => errors.clone(),
            _ => FieldErrors::default(),
        }
    }

    /// Translated text shown to visitors. `Config` messages are local UX
    /// feedback and are shown as-is.
    #[must_use]
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            Self::Config(message) => message.clone(),
            Self::Network(_) => Message::Network.text(locale).to_string(),
            Self::Timeout(_) => Message::Timeout.text(locale).to_string(),
            Self::Http { status, .. } => status_message(*status, locale).to_string(),
            Self::Unauthorized => status_message(401, locale).to_string(),
            Self::Validation(_) => Message::Validation.text(locale).to_string(),
            Self::Parse(_) | Self::Serialization(_) => Message::Unexpected.text(locale).to_string(),
        }
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Builds an error from a non-success response body. `422` bodies shaped like
/// `{"errors": {"field": "message"}}` become [`Error::Validation`].
#[must_use]
pub(crate) fn from_status_and_body(status: u16, body: &str) -> Error {
    let json = serde_json::from_str::<Value>(body).ok();

    if status == 422 {
        if let Some(errors) = json.as_ref().and_then(field_errors_from_json) {
            return Error::Validation(errors);
        }
    }

    let message = json
        .as_ref()
        .and_then(message_from_json)
        .unwrap_or_else(|| body.to_string());

    Error::Http {
        status,
        message: sanitize_body(&message),
    }
}

fn message_from_json(json: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

fn field_errors_from_json(json: &Value) -> Option<FieldErrors> {
    let errors = json.get("errors")?.as_object()?;
    let mut fields = FieldErrors::default();

    for (field, value) in errors {
        let message = match value {
            Value::String(message) => message.clone(),
            Value::Array(messages) => messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };
        fields.insert(field, sanitize_body(&message));
    }

    (!fields.is_empty()).then_some(fields)
}

/// Sanitizes error bodies for user-facing messages by trimming and truncating.
#[must_use]
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detail_is_unwrapped() {
        let error = from_status_and_body(409, r#"{"detail":"Slug already taken"}"#);
        assert_eq!(
            error,
            Error::Http {
                status: 409,
                message: "Slug already taken".to_string()
            }
        );
    }

    #[test]
    fn plain_bodies_are_truncated() {
        let body = "x".repeat(500);
        let Error::Http { message, .. } = from_status_and_body(500, &body) else {
            panic!("expected http error");
        };
        assert_eq!(message.len(), MAX_ERROR_CHARS);
    }

    #[test]
    fn empty_body_gets_placeholder() {
        let Error::Http { message, .. } = from_status_and_body(502, "  ") else {
            panic!("expected http error");
        };
        assert_eq!(message, "Request failed.");
    }

    #[test]
    fn unprocessable_entity_maps_field_errors() {
        let body = r#"{"errors":{"slug":["is taken","must be lowercase"],"title":"is required"}}"#;
        let error = from_status_and_body(422, body);
        let fields = error.field_errors();

        assert_eq!(fields.get("slug"), Some("is taken must be lowercase"));
        assert_eq!(fields.get("title"), Some("is required"));
        assert_eq!(error.status(), Some(422));
    }

    #[test]
    fn unprocessable_entity_without_fields_is_http() {
        let error = from_status_and_body(422, r#"{"message":"bad payload"}"#);
        assert!(matches!(error, Error::Http { status: 422, .. }));
    }

    #[test]
    fn user_message_uses_translations() {
        let error = Error::Http {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(
            error.user_message(Locale::Es),
            "No se encontró la página o el recurso solicitado."
        );
        assert_eq!(
            Error::Config("Name is required.".to_string()).user_message(Locale::Es),
            "Name is required."
        );
    }
}
