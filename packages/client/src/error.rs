//! Client error definitions.

use thiserror::Error;
use uniborrow_server::domain::{SignUpValidationError, ValueObjectError};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the server
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body; `message` is shown verbatim
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("concierge connection failed: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("unexpected frame from server: {0}")]
    Frame(#[from] serde_json::Error),

    #[error("concierge connection closed")]
    ConnectionClosed,

    /// The concierge refused the message
    #[error("{0}")]
    Rejected(String),

    #[error("invalid listing data: {0}")]
    InvalidListing(#[from] ValueObjectError),

    #[error(transparent)]
    SignUp(#[from] SignUpValidationError),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}
