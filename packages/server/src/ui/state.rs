//! Shared server state.

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{
        IdentityProvider, ListingRepository, ProfileRepository, RecommendationService,
        SafeZoneRepository, SessionRepository,
    },
    infrastructure::{
        identity::InMemoryIdentityProvider,
        recommendation::OfflineRecommendationService,
        repository::{InMemoryCatalogRepository, InMemoryProfileRepository, InMemorySessionRepository},
    },
};

/// Shared application state
///
/// Every collaborator is injected as a trait object, so handlers never
/// know whether they talk to the hosted services or the in-memory ones.
pub struct AppState {
    /// Listing collection（データアクセス層の抽象化）
    pub listings: Arc<dyn ListingRepository>,
    /// Safe exchange zone directory
    pub safe_zones: Arc<dyn SafeZoneRepository>,
    /// Signed-in sessions
    pub sessions: Arc<dyn SessionRepository>,
    /// Stored profiles
    pub profiles: Arc<dyn ProfileRepository>,
    /// Authentication service
    pub identity: Arc<dyn IdentityProvider>,
    /// Concierge and description generator
    pub recommender: Arc<dyn RecommendationService>,
    /// Upper bound for one concierge call (`None` = unbounded)
    pub concierge_timeout: Option<Duration>,
}

impl AppState {
    /// Seeded catalog, in-memory auth and the given recommendation service.
    ///
    /// Used when no hosted services are configured, and by the integration tests.
    pub fn in_memory(
        recommender: Arc<dyn RecommendationService>,
        concierge_timeout: Option<Duration>,
    ) -> Self {
        let catalog = Arc::new(InMemoryCatalogRepository::seeded());
        Self {
            listings: catalog.clone(),
            safe_zones: catalog,
            sessions: Arc::new(InMemorySessionRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            identity: Arc::new(InMemoryIdentityProvider::new()),
            recommender,
            concierge_timeout,
        }
    }

    /// Fully offline state: in-memory everything, no generated text.
    pub fn offline() -> Self {
        Self::in_memory(Arc::new(OfflineRecommendationService), None)
    }
}
