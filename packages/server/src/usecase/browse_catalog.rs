//! UseCase: カタログ閲覧
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BrowseCatalogUseCase::execute() / find() メソッド
//!
//! ### なぜこのテストが必要か
//! - 検索条件に一致するリスティングのみが元の順序で返されることを保証
//! - 絞り込み前の総数が返されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：検索・カテゴリ指定・指定なし
//! - 異常系：存在しないリスティング ID
//! - エッジケース：一致なし（空の結果）

use std::sync::Arc;

use crate::domain::{CatalogQuery, Listing, ListingId, ListingRepository, filter_listings};

use super::error::CatalogError;

/// 絞り込み結果
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// 条件に一致したリスティング（元の順序）
    pub listings: Vec<Listing>,
    /// 絞り込み前の総数
    pub total: usize,
}

/// カタログ閲覧のユースケース
pub struct BrowseCatalogUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ListingRepository>,
}

impl BrowseCatalogUseCase {
    /// 新しい BrowseCatalogUseCase を作成
    pub fn new(repository: Arc<dyn ListingRepository>) -> Self {
        Self { repository }
    }

    /// 検索条件でカタログを絞り込む
    pub async fn execute(&self, query: &CatalogQuery) -> CatalogPage {
        let all = self.repository.list_listings().await;
        let listings = filter_listings(&all, query);
        tracing::debug!(
            "Catalog query {:?} matched {} of {} listings",
            query,
            listings.len(),
            all.len()
        );
        CatalogPage {
            listings,
            total: all.len(),
        }
    }

    /// ID を指定してリスティングを取得
    pub async fn find(&self, id: &ListingId) -> Result<Listing, CatalogError> {
        self.repository
            .get_listing(id)
            .await
            .map_err(|_| CatalogError::ListingNotFound(id.to_string()))
    }
}
