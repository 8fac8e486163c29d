//! Sign-up validation and profile resolution.

use super::{
    entity::{Identity, ProfileRecord, UserProfile},
    error::SignUpValidationError,
    value_object::Rating,
};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Display name used when neither profile nor identity carries one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Sign-up form as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Local checks run before contacting the identity provider.
    ///
    /// The confirmation mismatch is reported before the length check.
    pub fn validate(&self) -> Result<(), SignUpValidationError> {
        if self.password != self.confirm_password {
            return Err(SignUpValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignUpValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }
}

/// Generated avatar URL for a user id.
pub fn default_avatar(user_id: &str) -> String {
    format!("{AVATAR_BASE_URL}{user_id}")
}

/// Resolve the profile shown for a signed-in user.
///
/// Precedence per field: stored profile value if present and non-null,
/// then identity metadata, then the default. Display name falls back to
/// the account email before `DEFAULT_DISPLAY_NAME`. A stored rating outside
/// the valid range is ignored.
pub fn merge_profile(profile: Option<&ProfileRecord>, identity: &Identity) -> UserProfile {
    let name = profile
        .and_then(|p| non_empty(p.name.as_ref()))
        .or_else(|| non_empty(identity.display_name.as_ref()))
        .or_else(|| non_empty(identity.email.as_ref()))
        .cloned()
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    let avatar = profile
        .and_then(|p| non_empty(p.avatar.as_ref()))
        .or_else(|| non_empty(identity.avatar.as_ref()))
        .cloned()
        .unwrap_or_else(|| default_avatar(&identity.id));

    let rating = profile
        .and_then(|p| p.rating)
        .and_then(|value| Rating::new(value).ok())
        .unwrap_or_else(Rating::top);

    let verified = profile.and_then(|p| p.verified).unwrap_or(false);

    UserProfile {
        id: identity.id.clone(),
        name,
        avatar,
        rating,
        verified,
    }
}

fn non_empty(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.is_empty())
}
