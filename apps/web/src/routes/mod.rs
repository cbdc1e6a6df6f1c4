//! Route table. Public pages and auth forms share `PublicLayout`; the customer
//! area and the back office have their own guarded layouts.

mod about;
mod admin;
mod blog;
mod contact;
mod dashboard;
mod error;
mod health;
mod home;
mod login;
mod not_found;
pub(crate) mod paths;
mod register;
mod services;
mod use_cases;

pub(crate) use not_found::{NotFoundContent, NotFoundPage};

use crate::components::{AdminLayout, DashboardLayout, PublicLayout};
use about::AboutPage;
use admin::{
    AdminAnalyticsPage, AdminBlogPage, AdminCategoriesPage, AdminHomePage, AdminInvoicesPage,
    AdminPagesPage, AdminServicesPage, AdminUseCasesPage, AdminUsersPage,
};
use blog::{BlogPage, BlogPostPage};
use contact::ContactPage;
use dashboard::{DashboardPage, OrderDetailPage, OrdersPage, ProfilePage};
use error::ErrorPage;
use health::HealthPage;
use home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;
use login::LoginPage;
use register::RegisterPage;
use services::{ServiceDetailPage, ServicesPage};
use use_cases::{UseCaseDetailPage, UseCasesPage};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                <Route path=path!("") view=DashboardPage />
                <Route path=path!("orders") view=OrdersPage />
                <Route path=path!("orders/:id") view=OrderDetailPage />
                <Route path=path!("profile") view=ProfilePage />
            </ParentRoute>
            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("") view=AdminHomePage />
                <Route path=path!("pages") view=AdminPagesPage />
                <Route path=path!("services") view=AdminServicesPage />
                <Route path=path!("blog") view=AdminBlogPage />
                <Route path=path!("blog/categories") view=AdminCategoriesPage />
                <Route path=path!("use-cases") view=AdminUseCasesPage />
                <Route path=path!("users") view=AdminUsersPage />
                <Route path=path!("invoices") view=AdminInvoicesPage />
                <Route path=path!("analytics") view=AdminAnalyticsPage />
            </ParentRoute>
            <ParentRoute path=path!("") view=PublicLayout>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/services") view=ServicesPage />
                <Route path=path!("/services/:slug") view=ServiceDetailPage />
                <Route path=path!("/use-cases") view=UseCasesPage />
                <Route path=path!("/use-cases/:slug") view=UseCaseDetailPage />
                <Route path=path!("/blog") view=BlogPage />
                <Route path=path!("/blog/:slug") view=BlogPostPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/error") view=ErrorPage />
                <Route path=path!("/health") view=HealthPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
