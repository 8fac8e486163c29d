//! Payloads exchanged with the hosted authentication/profile store.

use serde::{Deserialize, Serialize};

use crate::domain::Identity;

/// Password grant request body
#[derive(Debug, Clone, Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Sign-up request body. `data` becomes the user's metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignUpMetadata<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpMetadata<'a> {
    pub name: &'a str,
}

/// User metadata as stored by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadataDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// User object
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadataDto>,
}

impl From<UserDto> for Identity {
    fn from(user: UserDto) -> Self {
        let metadata = user.user_metadata.unwrap_or_default();
        Self {
            id: user.id,
            email: user.email.filter(|v| !v.is_empty()),
            display_name: metadata.name.filter(|v| !v.is_empty()),
            avatar: metadata.avatar.filter(|v| !v.is_empty()),
        }
    }
}

/// Token response from the password grant, and from sign-up when the
/// account is confirmed immediately.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponseDto {
    pub access_token: String,
    pub user: UserDto,
}

/// Sign-up response: either a token response or the bare user object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponseDto {
    Session(TokenResponseDto),
    PendingConfirmation(UserDto),
}

/// Error body. Different endpoints fill different fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBodyDto {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBodyDto {
    /// Most specific human-readable message in the body.
    pub fn into_message(self) -> Option<String> {
        self.msg
            .or(self.error_description)
            .or(self.message)
            .or(self.error)
            .filter(|m| !m.is_empty())
    }
}
