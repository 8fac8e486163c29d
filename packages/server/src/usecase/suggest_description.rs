//! UseCase: 出品説明文の提案
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SuggestDescriptionUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 推薦サービスが失敗しても必ず説明文が返されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：生成された説明文が返される
//! - 異常系：応答なし（固定文言）
//! - エッジケース：空白のみの商品名（外部呼び出しを行わない）

use std::sync::Arc;

use crate::domain::RecommendationService;

/// 説明文を生成できなかった場合の固定文言
pub const DESCRIPTION_FALLBACK: &str = "A high-quality item perfect for campus life.";

/// 出品説明文提案のユースケース
pub struct SuggestDescriptionUseCase {
    /// 推薦サービス（外部）
    recommender: Arc<dyn RecommendationService>,
}

impl SuggestDescriptionUseCase {
    /// 新しい SuggestDescriptionUseCase を作成
    pub fn new(recommender: Arc<dyn RecommendationService>) -> Self {
        Self { recommender }
    }

    /// 商品名から短い説明文を生成
    ///
    /// 失敗時は `DESCRIPTION_FALLBACK` を返す（エラーにはならない）
    pub async fn execute(&self, item_name: &str) -> String {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return DESCRIPTION_FALLBACK.to_string();
        }

        self.recommender
            .describe(item_name)
            .await
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| {
                tracing::info!("No description generated for '{}'", item_name);
                DESCRIPTION_FALLBACK.to_string()
            })
    }
}
