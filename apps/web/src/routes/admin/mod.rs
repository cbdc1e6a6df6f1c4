//! Back office screens. Rendered inside `AdminLayout`, which hides the whole
//! subtree from non-admins; the backend authorizes every call again.

mod analytics;
mod blog;
mod categories;
mod crud;
mod invoices;
mod pages;
mod services;
mod use_cases;
mod users;

pub(crate) use analytics::AdminAnalyticsPage;
pub(crate) use blog::AdminBlogPage;
pub(crate) use categories::AdminCategoriesPage;
pub(crate) use invoices::AdminInvoicesPage;
pub(crate) use pages::AdminPagesPage;
pub(crate) use services::AdminServicesPage;
pub(crate) use use_cases::AdminUseCasesPage;
pub(crate) use users::AdminUsersPage;

use crate::app_lib::theme::Theme;
use crate::components::PageHeader;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const SECTIONS: [(&str, &str, &str); 8] = [
    (paths::ADMIN_PAGES, "article", "Pages"),
    (paths::ADMIN_SERVICES, "design_services", "Services"),
    (paths::ADMIN_BLOG, "edit_note", "Blog posts"),
    (paths::ADMIN_BLOG_CATEGORIES, "label", "Blog categories"),
    (paths::ADMIN_USE_CASES, "cases", "Use cases"),
    (paths::ADMIN_USERS, "group", "Users"),
    (paths::ADMIN_INVOICES, "request_quote", "Invoices"),
    (paths::ADMIN_ANALYTICS, "monitoring", "Analytics"),
];

#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! {
        <PageHeader title="Back office" subtitle="Manage site content, accounts and billing." />
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {SECTIONS
                .into_iter()
                .map(|(target, icon, label)| {
                    view! {
                        <A href=target {..} class=Theme::CARD>
                            <span class="material-symbols-outlined text-3xl text-blue-600">{icon}</span>
                            <p class="mt-2 font-medium text-gray-900 dark:text-white">{label}</p>
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}
