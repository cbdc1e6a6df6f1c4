//! Failure view for page loads. Unauthorized errors drop the local session and
//! redirect to `/login`; HTTP failures redirect to `/error?status=N`; transport
//! errors are shown inline.

use crate::app_lib::{errors, AppError};
use crate::components::ui::{Alert, AlertKind};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoadError(error: AppError) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let message = errors::user_message(&error);

    if let Some(path) = errors::recovery_path(&error) {
        if error.is_unauthorized() {
            auth.clear_session();
        }
        tracing::debug!(target = %path, "redirecting after failed load");
        Effect::new(move |_| navigate(&path, Default::default()));
    }

    view! { <Alert kind=AlertKind::Error message=message /> }
}
