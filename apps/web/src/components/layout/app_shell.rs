//! Site chrome shared by every route: header navigation, account links and a
//! footer with build metadata. Navigation is client-side only; the backend
//! enforces access control.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

const PUBLIC_LINKS: [(&str, &str); 5] = [
    (paths::SERVICES, "Services"),
    (paths::USE_CASES, "Use cases"),
    (paths::BLOG, "Blog"),
    (paths::ABOUT, "About"),
    (paths::CONTACT, "Contact"),
];

/// Wraps routes with the header and main content container.
#[component]
pub fn SiteShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let sign_out = move |_| {
        set_menu_open.set(false);
        auth.sign_out();
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="Consulta" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Consulta"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            {PUBLIC_LINKS
                                .into_iter()
                                .map(|(target, label)| {
                                    view! {
                                        <li>
                                            <A
                                                href=target
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                            <Show
                                when=move || auth.is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A
                                                href=paths::LOGIN
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href=paths::REGISTER
                                                {..}
                                                class=NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                "Register"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=paths::DASHBOARD
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Dashboard"
                                    </A>
                                </li>
                                <Show when=move || auth.is_admin.get()>
                                    <li>
                                        <A
                                            href=paths::ADMIN
                                            {..}
                                            class=NAV_LINK
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Admin"
                                        </A>
                                    </li>
                                </Show>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=sign_out>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-100 dark:border-gray-800 py-6">
                <div class="container mx-auto px-4 flex flex-wrap items-center justify-between gap-2 text-xs text-gray-400">
                    <span>"Consulta"</span>
                    <A href=paths::HEALTH {..} class="font-mono uppercase tracking-tighter">
                        {build_info::git_commit_hash()}
                    </A>
                </div>
            </footer>
        </div>
    }
}
