//! UniBorrow marketplace server.
//!
//! Serves the catalog, safe zones, auth endpoints and the concierge socket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin uniborrow-server
//! ```

use clap::Parser;
use uniborrow_server::ServerConfig;
use uniborrow_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = uniborrow_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
