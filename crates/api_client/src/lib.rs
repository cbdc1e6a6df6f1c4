//! Typed client for the Consulta website backend.
//!
//! The backend owns every entity, validation rule and business decision. This
//! crate only mirrors response shapes, validates form drafts for early UX
//! feedback and handles the bearer-token lifecycle:
//!
//! 1. **Login:** `POST /auth/login` returns an access/refresh token pair which is
//!    persisted through a [`TokenStore`].
//! 2. **Usage:** every request carries `Authorization: Bearer <access>`.
//! 3. **Refresh:** a `401` on an authenticated request triggers a single
//!    `POST /auth/refresh`; the original request is retried once with the new
//!    pair. Concurrent `401`s share one refresh. A failed refresh clears the
//!    store and yields [`Error::Unauthorized`].
//!
//! The same client is used by the browser app (wasm32) and the operator CLI.
//! Token material must never be logged.

pub mod auth;
pub mod chat;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod pagination;
pub mod resources;

pub use auth::{Claims, MemoryTokenStore, TokenPair, TokenStore};
pub use chat::{ChatRole, ChatSession};
pub use client::ApiClient;
pub use config::{ClientConfig, RuntimeOverrides};
pub use error::Error;
pub use forms::{FieldErrors, Validate};
pub use i18n::Locale;
pub use pagination::{PageRequest, Paginated};

pub type Result<T, E = Error> = std::result::Result<T, E>;
