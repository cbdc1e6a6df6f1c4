//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Session Lifecycle
//!
//! 1. **Login:** `/login` posts credentials; the returned access/refresh pair is
//!    kept in `localStorage` by [`api::LocalStorageTokenStore`].
//! 2. **Usage:** every API call built through [`api::client`] attaches the access
//!    token as `Authorization: Bearer`.
//! 3. **Refresh:** a `401` triggers a single refresh and retry inside the client.
//!    If that fails the tokens are cleared and routes redirect to `/login`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging tokens.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod theme;

pub(crate) use api::client;
pub(crate) use errors::AppError;
