//! Recommendation service used when no API key is configured.

use async_trait::async_trait;

use crate::domain::{ListingSnapshot, RecommendationService};

/// Always signals absence, so callers fall back to their fixed texts.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRecommendationService;

#[async_trait]
impl RecommendationService for OfflineRecommendationService {
    async fn recommend(&self, _prompt: &str, listings: &[ListingSnapshot]) -> Option<String> {
        tracing::debug!(
            "Recommendation requested offline ({} listings in snapshot)",
            listings.len()
        );
        None
    }

    async fn describe(&self, _item_name: &str) -> Option<String> {
        None
    }
}
