//! Shared submit feedback for forms: inline field errors, a summary alert and
//! the session-lost redirect.

use crate::app_lib::{errors, AppError};
use crate::components::{Alert, AlertKind, LoadError};
use consulta_client::{FieldErrors, Validate};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct FormFeedback {
    pub errors: RwSignal<FieldErrors>,
    failure: RwSignal<Option<String>>,
    success: RwSignal<Option<String>>,
    session_lost: RwSignal<Option<AppError>>,
}

impl FormFeedback {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(FieldErrors::default()),
            failure: RwSignal::new(None),
            success: RwSignal::new(None),
            session_lost: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.errors.set(FieldErrors::default());
        self.failure.set(None);
        self.success.set(None);
    }

    /// Runs client-side validation; on failure the errors are shown and
    /// `false` is returned so nothing is sent.
    pub fn check<V: Validate>(&self, draft: &V) -> bool {
        self.reset();
        match draft.validate() {
            Ok(()) => true,
            Err(errors) => {
                self.errors.set(errors);
                self.failure.set(Some(errors_summary()));
                false
            }
        }
    }

    /// Maps a failed submit onto the form.
    pub fn fail(&self, err: AppError) {
        if err.is_unauthorized() {
            self.session_lost.set(Some(err));
            return;
        }
        let field_errors = err.field_errors();
        if !field_errors.is_empty() {
            self.errors.set(field_errors);
        }
        self.failure.set(Some(errors::user_message(&err)));
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.reset();
        self.success.set(Some(message.into()));
    }
}

fn errors_summary() -> String {
    errors::user_message(&AppError::Validation(FieldErrors::default()))
}

/// Renders the outcome of the last submit.
#[component]
pub fn FormStatus(feedback: FormFeedback) -> impl IntoView {
    view! {
        {move || {
            feedback
                .session_lost
                .get()
                .map(|err| view! { <LoadError error=err /> })
        }}
        {move || {
            feedback
                .failure
                .get()
                .map(|message| {
                    view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> }
                })
        }}
        {move || {
            feedback
                .success
                .get()
                .map(|message| {
                    view! { <div class="mt-4"><Alert kind=AlertKind::Success message=message /></div> }
                })
        }}
    }
}
