//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{
    current_user, describe_listing, get_listing, health_check, list_categories, list_listings,
    list_safe_zones, sign_in, sign_out, sign_up,
};

// Re-export WebSocket handlers
pub use websocket::concierge_handler;
