//! Layout components shared across routes.

mod admin_layout;
mod app_shell;
mod dashboard_layout;
mod public_layout;
mod sidebar;

pub(crate) use admin_layout::AdminLayout;
pub(crate) use app_shell::SiteShell;
pub(crate) use dashboard_layout::DashboardLayout;
pub(crate) use public_layout::PublicLayout;
pub(crate) use sidebar::{NavLink, Sidebar};
