//! UniBorrow marketplace server library.
//!
//! Layered as domain → usecase → infrastructure / ui. The catalog filter,
//! concierge state machine and profile merge live in `domain` so the
//! client can reuse them.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run;
