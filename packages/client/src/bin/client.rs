//! UniBorrow terminal client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin uniborrow-client -- --server-url http://127.0.0.1:8080
//! ```

use clap::Parser;
use uniborrow_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "uniborrow-client", version, about)]
struct Args {
    /// Base URL of the UniBorrow server
    #[arg(long, env = "UNIBORROW_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    server_url: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "UNIBORROW_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = uniborrow_client::run_client(&args.server_url).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
