//! Auth session state and context for the frontend. The provider hydrates the
//! signed-in user once on mount from stored tokens and exposes derived signals
//! for guards, navigation and routes.

use crate::app_lib::client;
use consulta_client::{resources::users::{Role, User}, Claims};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    /// True until the first hydration attempt finishes.
    pub is_loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    fn new(user: RwSignal<Option<User>>, is_loading: RwSignal<bool>) -> Self {
        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        let is_admin = Signal::derive(move || user.with(|user| user.as_ref().is_some_and(User::is_admin)));
        Self {
            user,
            is_loading,
            is_authenticated,
            is_admin,
        }
    }

    /// Stores the user after login, registration or hydration.
    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
        self.is_loading.set(false);
    }

    /// Clears the in-memory session. Stored tokens are cleared by the client.
    pub fn clear_session(&self) {
        self.user.set(None);
        self.is_loading.set(false);
    }

    /// Revokes the session server-side (best effort), clears local state and
    /// reloads the home page.
    pub fn sign_out(&self) {
        let auth = *self;
        spawn_local(async move {
            if let Ok(api) = client() {
                api.logout().await;
            }
            auth.clear_session();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    }
}

/// Fallback identity when `/auth/me` cannot be reached: the unverified access
/// token claims. Only used for navigation; the backend re-checks every call.
fn user_from_claims(claims: Claims) -> User {
    User {
        id: claims.sub,
        email: claims.email.unwrap_or_default(),
        full_name: None,
        role: claims
            .role
            .as_deref()
            .and_then(Role::parse)
            .unwrap_or_default(),
        is_active: true,
        created_at: None,
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(None), RwSignal::new(true));
    provide_context(auth);

    spawn_local(async move {
        let api = match client() {
            Ok(api) => api,
            Err(err) => {
                tracing::warn!(error = %err, "api client unavailable");
                auth.clear_session();
                return;
            }
        };
        if !api.has_session() {
            auth.clear_session();
            return;
        }
        match api.current_user().await {
            Ok(Some(user)) => auth.set_user(user),
            Ok(None) => auth.clear_session(),
            Err(err) => {
                tracing::warn!(error = %err, "session hydration failed");
                // Offline fallback; an expired token must not restore a signed-in UI.
                let now_secs = (js_sys::Date::now() / 1000.0) as u64;
                match api.unexpired_claims(now_secs) {
                    Some(claims) => auth.set_user(user_from_claims(claims)),
                    None => auth.clear_session(),
                }
            }
        }
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| AuthContext::new(RwSignal::new(None), RwSignal::new(false)))
}
