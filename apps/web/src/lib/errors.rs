//! Frontend error helpers. Routes surface client errors either inline (forms)
//! or through a redirect: `401` goes to `/login`, other status failures go to
//! the generic `/error?status=N` page. Messages are translated and never echo
//! raw response bodies.

use super::config;
use consulta_client::Locale;

pub type AppError = consulta_client::Error;

/// Locale used for user-facing messages.
pub fn locale() -> Locale {
    config::load().locale
}

/// Translated message for inline display.
pub fn user_message(err: &AppError) -> String {
    err.user_message(locale())
}

/// Where a failed page load should send the visitor. `None` means the error is
/// shown inline (network failures, validation).
pub fn recovery_path(err: &AppError) -> Option<String> {
    if err.is_unauthorized() {
        return Some("/login".to_string());
    }
    err.status().map(|status| format!("/error?status={status}"))
}
