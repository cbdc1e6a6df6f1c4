//! Generic failure page reached through `/error?status=N`. The message comes
//! from the translated status table; unknown or missing codes fall back to
//! the generic server-error text.

use crate::app_lib::errors;
use crate::routes::paths;
use consulta_client::i18n::status_message;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_query_map};

#[component]
pub fn ErrorPage() -> impl IntoView {
    let query = use_query_map();
    let status = move || {
        query
            .with(|q| q.get("status"))
            .and_then(|value| value.parse::<u16>().ok())
            .filter(|code| (400..600).contains(code))
            .unwrap_or(500)
    };
    let message = move || status_message(status(), errors::locale());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
            <h1 class="text-7xl font-black text-gray-200 dark:text-gray-700 select-none">{status}</h1>
            <p class="text-xl font-semibold text-gray-900 dark:text-white">{message}</p>
            <A
                href=paths::HOME
                {..}
                class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
            >
                <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                "Go Home"
            </A>
        </div>
    }
}
