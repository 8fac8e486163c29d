//! Server configuration from command-line flags and environment variables.

use std::time::Duration;

use clap::Parser;

use crate::infrastructure::recommendation::DEFAULT_GEMINI_MODEL;

/// UniBorrow marketplace server.
///
/// Hosted services are optional: without `SUPABASE_URL` accounts live in
/// memory, and without `GEMINI_API_KEY` the concierge always falls back.
#[derive(Debug, Clone, Parser)]
#[command(name = "uniborrow-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "UNIBORROW_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "UNIBORROW_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the hosted auth/profile service
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Public (anon) API key for the hosted auth/profile service
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    /// API key for the generative language service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Model name used for recommendations and descriptions
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    /// Seconds to wait for a concierge reply (0 waits forever)
    #[arg(long, env = "CONCIERGE_TIMEOUT_SECS", default_value_t = 30)]
    pub concierge_timeout_secs: u64,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "UNIBORROW_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn concierge_timeout(&self) -> Option<Duration> {
        (self.concierge_timeout_secs > 0).then(|| Duration::from_secs(self.concierge_timeout_secs))
    }
}
