//! Domain-level frontend features shared across routes: the auth session,
//! form submit feedback and the floating chat widget. Entity access lives in
//! `consulta_client`.

pub(crate) mod auth;
pub(crate) mod chat;
pub(crate) mod forms;
