//! InMemory Catalog Repository 実装
//!
//! ドメイン層が定義する ListingRepository / SafeZoneRepository trait の具体的な実装。
//! 起動時に与えられたリスティングと受け渡し場所を Vec として保持します。
//!
//! ## 技術的負債
//!
//! ドメインモデル（`Listing`）を直接ストレージとして使用しています。
//! ホスト型データストアから読み込む実装を追加する際は、以下の変換層が必要になります：
//!
//! ```text
//! DB Row/JSON → ListingRow (DTO) → Listing (ドメインモデル)
//! ```

use async_trait::async_trait;

use crate::domain::{
    Listing, ListingId, ListingRepository, RepositoryError, SafeZone, SafeZoneRepository,
};

use super::seed::{seed_listings, seed_safe_zones};

/// インメモリ Catalog Repository 実装
///
/// リスティングは不変のため、ロックは不要です。
pub struct InMemoryCatalogRepository {
    listings: Vec<Listing>,
    safe_zones: Vec<SafeZone>,
}

impl InMemoryCatalogRepository {
    /// 新しい InMemoryCatalogRepository を作成
    pub fn new(listings: Vec<Listing>, safe_zones: Vec<SafeZone>) -> Self {
        Self {
            listings,
            safe_zones,
        }
    }

    /// 初期データ入りの InMemoryCatalogRepository を作成
    pub fn seeded() -> Self {
        Self::new(seed_listings(), seed_safe_zones())
    }
}

#[async_trait]
impl ListingRepository for InMemoryCatalogRepository {
    async fn list_listings(&self) -> Vec<Listing> {
        self.listings.clone()
    }

    async fn get_listing(&self, id: &ListingId) -> Result<Listing, RepositoryError> {
        self.listings
            .iter()
            .find(|listing| &listing.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::ListingNotFound(id.to_string()))
    }
}

#[async_trait]
impl SafeZoneRepository for InMemoryCatalogRepository {
    async fn list_safe_zones(&self) -> Vec<SafeZone> {
        self.safe_zones.clone()
    }
}
