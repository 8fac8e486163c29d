//! Data transfer objects.

pub mod gemini;
pub mod http;
pub mod supabase;
pub mod websocket;
