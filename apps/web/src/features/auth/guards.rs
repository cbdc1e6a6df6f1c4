//! UX-only route guards. Real access control lives on the API.

use crate::components::Spinner;
use crate::features::auth::state::use_auth;
use crate::routes::{paths, NotFoundContent};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders children for signed-in users and sends anonymous visitors to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_loading.get() && !auth.is_authenticated.get() {
            navigate(paths::LOGIN, Default::default());
        }
    });

    move || {
        if auth.is_authenticated.get() {
            children().into_any()
        } else {
            view! { <Spinner centered=true /> }.into_any()
        }
    }
}

/// Renders children for admins. Everyone else sees the 404 page so the back
/// office does not advertise itself.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || {
        if auth.is_loading.get() {
            view! { <Spinner centered=true /> }.into_any()
        } else if auth.is_admin.get() {
            children().into_any()
        } else {
            view! { <NotFoundContent /> }.into_any()
        }
    }
}
