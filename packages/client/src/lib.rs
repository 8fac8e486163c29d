//! Terminal client for the UniBorrow marketplace.
//!
//! Browses the catalog with the same filter the server uses, signs in and
//! out, and keeps one concierge chat open for the whole session.

pub mod api;
pub mod command;
pub mod concierge;
pub mod error;
pub mod render;
mod repl;

// Re-export entry points
pub use error::ClientError;
pub use repl::run_client;
