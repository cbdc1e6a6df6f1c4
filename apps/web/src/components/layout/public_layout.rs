use crate::components::layout::SiteShell;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn PublicLayout() -> impl IntoView {
    view! {
        <SiteShell>
            <Outlet />
        </SiteShell>
    }
}
