//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::{AdminLayout, DashboardLayout, PublicLayout, SiteShell};
pub(crate) use ui::{
    Alert, AlertKind, Button, Checkbox, ConfirmDelete, LoadError, PageHeader, Pager, RichText,
    SelectField, Spinner, TextArea, TextField,
};
