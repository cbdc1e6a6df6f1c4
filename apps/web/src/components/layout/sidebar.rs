//! Side navigation for the dashboard and the back office.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

/// One sidebar entry. `exact` links are active only on their own path;
/// others also match nested paths.
#[derive(Clone, Copy)]
pub struct NavLink {
    pub target: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub exact: bool,
}

#[component]
pub fn Sidebar(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <aside class="w-full md:w-64 flex-shrink-0 md:border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900">
            <nav class="px-4 py-6">
                <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                    {title}
                </h3>
                <div class="mt-2 space-y-1">
                    {links.iter().map(|link| view! { <SidebarLink link=*link /> }).collect_view()}
                </div>
            </nav>
        </aside>
    }
}

#[component]
fn SidebarLink(link: NavLink) -> impl IntoView {
    let location = use_location();
    let active = Signal::derive(move || {
        let pathname = location.pathname.get();
        if link.exact {
            pathname == link.target
        } else {
            pathname == link.target || pathname.starts_with(&format!("{}/", link.target))
        }
    });

    view! {
        <A
            href=link.target
            {..}
            class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-blue-600=move || active.get()
            class:bg-blue-50=move || active.get()
            class:dark:bg-blue-900=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-blue-600=move || active.get()
                class:text-gray-400=move || !active.get()
            >
                {link.icon}
            </span>
            {link.label}
        </A>
    }
}
