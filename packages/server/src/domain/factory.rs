//! Domain factories for creating identifiers.

use uuid::Uuid;

use super::{ConciergeSession, SessionToken, Timestamp};

/// Factory for generating SessionToken instances.
///
/// Keeps generation separate from the parsing rules in `SessionToken::new`.
pub struct SessionTokenFactory;

impl SessionTokenFactory {
    /// Generate a new SessionToken from a random UUID v4.
    pub fn generate() -> SessionToken {
        SessionToken::from_uuid(Uuid::new_v4())
    }
}

/// Factory for opening concierge conversations.
pub struct ConciergeSessionFactory;

impl ConciergeSessionFactory {
    /// Open a conversation with a fresh id, timestamped now.
    pub fn open() -> ConciergeSession {
        ConciergeSession::new(Uuid::new_v4(), Timestamp::now())
    }
}
