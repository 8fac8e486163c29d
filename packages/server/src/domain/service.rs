//! External service traits: identity provider and recommendation model.

use async_trait::async_trait;

use super::{Identity, ListingSnapshot, ProviderError, ProviderSession};

/// Hosted authentication service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str)
    -> Result<ProviderSession, ProviderError>;

    /// `Ok(None)` when the account was created but no session was issued
    /// (e.g. email confirmation pending).
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<ProviderSession>, ProviderError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError>;

    async fn get_user(&self, access_token: &str) -> Result<Identity, ProviderError>;
}

/// Generative-language capability behind the concierge.
///
/// Implementations never fail: every error is reported as `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Free-text recommendation for `prompt` given the catalog snapshot.
    async fn recommend(&self, prompt: &str, listings: &[ListingSnapshot]) -> Option<String>;

    /// Short rental description for an item name.
    async fn describe(&self, item_name: &str) -> Option<String>;
}
