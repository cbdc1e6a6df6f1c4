use crate::components::layout::{NavLink, SiteShell, Sidebar};
use crate::features::auth::RequireAdmin;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::Outlet;

const LINKS: &[NavLink] = &[
    NavLink {
        target: paths::ADMIN,
        icon: "admin_panel_settings",
        label: "Overview",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_PAGES,
        icon: "article",
        label: "Pages",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_SERVICES,
        icon: "design_services",
        label: "Services",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_BLOG,
        icon: "edit_note",
        label: "Blog posts",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_BLOG_CATEGORIES,
        icon: "label",
        label: "Blog categories",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_USE_CASES,
        icon: "cases",
        label: "Use cases",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_USERS,
        icon: "group",
        label: "Users",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_INVOICES,
        icon: "request_quote",
        label: "Invoices",
        exact: true,
    },
    NavLink {
        target: paths::ADMIN_ANALYTICS,
        icon: "monitoring",
        label: "Analytics",
        exact: true,
    },
];

/// Layout wrapper for the back office. Non-admins get the 404 page; the
/// backend still enforces access on every call.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <SiteShell>
            <RequireAdmin children=move || {
                view! {
                    <div class="flex flex-col md:flex-row gap-6">
                        <Sidebar title="Back office" links=LINKS />
                        <section class="flex-1 min-w-0">
                            <Outlet />
                        </section>
                    </div>
                }
            } />
        </SiteShell>
    }
}
