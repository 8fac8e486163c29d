//! Repository traits.
//!
//! Defined by the domain layer and implemented in infrastructure
//! (dependency inversion).

use async_trait::async_trait;

use super::{
    Listing, ListingId, ProfileRecord, RepositoryError, SafeZone, Session, SessionToken,
};

/// Read access to the listing collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Full collection in catalog order.
    async fn list_listings(&self) -> Vec<Listing>;

    async fn get_listing(&self, id: &ListingId) -> Result<Listing, RepositoryError>;
}

/// Read access to the safe exchange zone directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SafeZoneRepository: Send + Sync {
    async fn list_safe_zones(&self) -> Vec<SafeZone>;
}

/// Optional stored profile, keyed by user id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// `Ok(None)` when no profile row exists yet.
    async fn find_profile(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<Option<ProfileRecord>, RepositoryError>;
}

/// Signed-in sessions held by the server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: Session);

    async fn get(&self, token: &SessionToken) -> Result<Session, RepositoryError>;

    async fn remove(&self, token: &SessionToken) -> Result<Session, RepositoryError>;
}
