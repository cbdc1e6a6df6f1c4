use crate::components::layout::{NavLink, SiteShell, Sidebar};
use crate::features::auth::RequireAuth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::Outlet;

const LINKS: &[NavLink] = &[
    NavLink {
        target: paths::DASHBOARD,
        icon: "dashboard",
        label: "Overview",
        exact: true,
    },
    NavLink {
        target: paths::DASHBOARD_ORDERS,
        icon: "receipt_long",
        label: "Orders",
        exact: false,
    },
    NavLink {
        target: paths::DASHBOARD_PROFILE,
        icon: "person",
        label: "Profile",
        exact: true,
    },
];

/// Customer area. Anonymous visitors are sent to `/login`.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <SiteShell>
            <RequireAuth children=move || {
                view! {
                    <div class="flex flex-col md:flex-row gap-6">
                        <Sidebar title="My account" links=LINKS />
                        <section class="flex-1 min-w-0">
                            <Outlet />
                        </section>
                    </div>
                }
            } />
        </SiteShell>
    }
}
