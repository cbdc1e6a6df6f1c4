//! Auth feature module covering session hydration, sign out and route guards.
//! Tokens live in `localStorage` through the API client; this module only keeps
//! the signed-in user in memory and must never log token material.
//!
//! Flow Overview: login/register store a token pair and return the user, which
//! is placed in [`state::AuthContext`]. On mount the provider hydrates the user
//! from `/auth/me`. Any call that ends in `Unauthorized` clears the context.

mod guards;
pub(crate) mod state;

pub(crate) use guards::{RequireAdmin, RequireAuth};
