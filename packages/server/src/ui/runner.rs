//! Server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::{
        identity::SupabaseClient,
        recommendation::{GeminiRecommendationService, OfflineRecommendationService},
    },
};

use super::{router::create_router, signal::shutdown_signal, state::AppState};

/// Build the application state from configuration.
///
/// Hosted services are used when configured; otherwise the in-memory
/// counterparts take their place.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let http = reqwest::Client::builder().build()?;
    let timeout = config.concierge_timeout();

    let mut state = match &config.gemini_api_key {
        Some(api_key) => {
            tracing::info!("Concierge backed by model '{}'", config.gemini_model);
            AppState::in_memory(
                Arc::new(GeminiRecommendationService::new(
                    http.clone(),
                    api_key.clone(),
                    config.gemini_model.clone(),
                )),
                timeout,
            )
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, concierge replies will use the fallback");
            AppState::in_memory(Arc::new(OfflineRecommendationService), timeout)
        }
    };

    match &config.supabase_url {
        Some(url) => {
            let anon_key = config
                .supabase_anon_key
                .clone()
                .ok_or(ServerError::MissingSupabaseKey)?;
            let supabase = Arc::new(SupabaseClient::new(http, url.clone(), anon_key));
            state.identity = supabase.clone();
            state.profiles = supabase;
            tracing::info!("Accounts managed by {}", url);
        }
        None => {
            tracing::warn!("SUPABASE_URL not set, accounts are kept in memory");
        }
    }

    Ok(state)
}

/// Serve the application on an already bound listener until shutdown.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

/// Run the server.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(build_state(&config)?);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("UniBorrow server listening on http://{}", addr);

    serve(listener, state).await
}
