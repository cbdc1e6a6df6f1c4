//! Customer dashboard: overview, orders and profile. Rendered inside
//! `DashboardLayout`, which requires a signed-in user.

mod orders;
mod profile;

pub(crate) use orders::{OrderDetailPage, OrdersPage};
pub(crate) use profile::ProfilePage;

use crate::app_lib::{client, theme::Theme};
use crate::components::{LoadError, PageHeader, Spinner};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use consulta_client::{content::format_money, PageRequest};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.user
            .get()
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_default()
    };
    let recent = LocalResource::new(|| async { client()?.orders(&PageRequest::new(1, 5)).await });

    view! {
        <PageHeader title="Dashboard" />
        <p class="mb-6 text-lg text-gray-700 dark:text-gray-300">{greeting}</p>
        <div class=Theme::CARD>
            <div class="mb-4 flex items-center justify-between">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Recent orders"</h2>
                <A href=paths::DASHBOARD_ORDERS {..} class=Theme::LINK>"View all"</A>
            </div>
            <Suspense fallback=|| view! { <Spinner centered=true /> }>
                {move || match recent.get() {
                    Some(Ok(page)) if page.items.is_empty() => {
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "No orders yet. "
                                <A href=paths::SERVICES {..} class=Theme::LINK>"Browse services"</A>
                            </p>
                        }
                            .into_any()
                    }
                    Some(Ok(page)) => {
                        view! {
                            <ul class="divide-y divide-gray-100 dark:divide-gray-700">
                                {page
                                    .items
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <li class="flex items-center justify-between py-3 text-sm">
                                                <A href=paths::order_detail(&order.id) {..} class=Theme::LINK>
                                                    {order.service_name.clone().unwrap_or_else(|| order.service_id.clone())}
                                                </A>
                                                <span class=Theme::BADGE>{order.status.label()}</span>
                                                <span>{format_money(order.total, &order.currency)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => view! { <LoadError error=err /> }.into_any(),
                    None => view! { <Spinner centered=true /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
