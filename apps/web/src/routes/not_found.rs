//! 404 page for unknown routes and for back office paths seen by non-admins.

use crate::app_lib::errors;
use crate::components::SiteShell;
use crate::routes::paths;
use consulta_client::i18n::status_message;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top-level fallback with the site shell.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SiteShell>
            <NotFoundContent />
        </SiteShell>
    }
}

/// Inner 404 content without the shell, for use inside layouts.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    {status_message(404, errors::locale())}
                </p>
            </div>

            <div class="mt-8 flex flex-col sm:flex-row items-center justify-center gap-4">
                <A
                    href=paths::HOME
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800 transition-all"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Go Home"
                </A>
                <button
                    on:click=move |_| {
                        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                            let _ = history.back();
                        }
                    }
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
