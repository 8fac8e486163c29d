//! HTTP and WebSocket server.

mod error;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::create_router;
pub use runner::{build_state, run, serve};
pub use state::AppState;
