//! Alert banners for form outcomes and load failures. Messages come from the
//! translated status table or validation summaries and never carry tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn classes(self) -> (&'static str, &'static str) {
        match self {
            AlertKind::Error => (
                "flex items-start gap-2 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200",
                "error",
            ),
            AlertKind::Success => (
                "flex items-start gap-2 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200",
                "check_circle",
            ),
            AlertKind::Info => (
                "flex items-start gap-2 rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200",
                "info",
            ),
        }
    }
}

/// Renders a styled alert banner with a leading icon.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let (class, icon) = kind.classes();

    view! {
        <div class=class role="alert">
            <span class="material-symbols-outlined text-base">{icon}</span>
            <span>{message}</span>
        </div>
    }
}
