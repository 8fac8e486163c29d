//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueObjectError {
    /// ListingId validation error
    #[error("ListingId cannot be empty")]
    ListingIdEmpty,

    /// ListingId too long error
    #[error("ListingId cannot exceed {max} characters (got {actual})")]
    ListingIdTooLong { max: usize, actual: usize },

    /// Unknown category name
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Negative or non-finite daily fee
    #[error("Daily fee must be a finite, non-negative amount (got {0})")]
    InvalidDailyFee(f64),

    /// Rating outside the allowed range
    #[error("Rating must be between {min} and {max} (got {actual})")]
    RatingOutOfRange { min: f32, max: f32, actual: f32 },

    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// SessionToken is not a UUID
    #[error("SessionToken must be a valid UUID format (got: {0})")]
    SessionTokenInvalidFormat(String),
}

/// Errors raised by the concierge state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConciergeError {
    /// Blank input never reaches the transcript
    #[error("message cannot be empty")]
    EmptyMessage,

    /// A reply for the previous message is still pending
    #[error("a request is already in flight")]
    RequestInFlight,

    /// `settle` called while idle
    #[error("no request is in flight")]
    NoRequestInFlight,
}

/// Local sign-up form validation errors.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignUpValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Errors related to Repository access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Profile lookup failed: {0}")]
    ProfileUnavailable(String),
}

/// Error reported by the identity provider.
///
/// `message` is human readable and surfaced verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
