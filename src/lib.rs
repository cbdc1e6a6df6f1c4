//! Operator CLI for the Consulta website backend.
//!
//! The binary talks to the same REST API as the web app through
//! [`consulta_client`]: `check` queries the backend health endpoint and
//! `export` dumps a content collection as JSON for backups or migrations.

pub mod cli;

pub const GIT_COMMIT_HASH: &str = match option_env!("CONSULTA_GIT_SHA") {
    Some(hash) => hash,
    None => "unknown",
};
