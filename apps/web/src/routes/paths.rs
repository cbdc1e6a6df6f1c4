//! Route paths shared by navigation, guards and redirects.

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const SERVICES: &str = "/services";
pub const USE_CASES: &str = "/use-cases";
pub const BLOG: &str = "/blog";
pub const CONTACT: &str = "/contact";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const HEALTH: &str = "/health";

pub const DASHBOARD: &str = "/dashboard";
pub const DASHBOARD_ORDERS: &str = "/dashboard/orders";
pub const DASHBOARD_PROFILE: &str = "/dashboard/profile";

pub const ADMIN: &str = "/admin";
pub const ADMIN_PAGES: &str = "/admin/pages";
pub const ADMIN_SERVICES: &str = "/admin/services";
pub const ADMIN_BLOG: &str = "/admin/blog";
pub const ADMIN_BLOG_CATEGORIES: &str = "/admin/blog/categories";
pub const ADMIN_USE_CASES: &str = "/admin/use-cases";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_INVOICES: &str = "/admin/invoices";
pub const ADMIN_ANALYTICS: &str = "/admin/analytics";

pub fn service_detail(slug: &str) -> String {
    format!("{SERVICES}/{slug}")
}

pub fn use_case_detail(slug: &str) -> String {
    format!("{USE_CASES}/{slug}")
}

pub fn blog_post(slug: &str) -> String {
    format!("{BLOG}/{slug}")
}

pub fn blog_category(slug: &str) -> String {
    format!("{BLOG}?category={slug}")
}

pub fn order_detail(id: &str) -> String {
    format!("{DASHBOARD_ORDERS}/{id}")
}

/// Orders page with the order form preselecting a service.
pub fn order_service(service_id: &str) -> String {
    format!("{DASHBOARD_ORDERS}?service={service_id}")
}
