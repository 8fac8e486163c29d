//! Router setup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::{
        concierge_handler, current_user, describe_listing, get_listing, health_check,
        list_categories, list_listings, list_safe_zones, sign_in, sign_out, sign_up,
    },
    state::AppState,
};

/// Create the axum Router with every API route and the concierge socket.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/categories", get(list_categories))
        .route("/api/listings", get(list_listings))
        .route("/api/listings/describe", post(describe_listing))
        .route("/api/listings/{id}", get(get_listing))
        .route("/api/safe-zones", get(list_safe_zones))
        .route("/api/auth/sign-up", post(sign_up))
        .route("/api/auth/sign-in", post(sign_in))
        .route("/api/auth/sign-out", post(sign_out))
        .route("/api/auth/me", get(current_user))
        .route("/ws/concierge", get(concierge_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
