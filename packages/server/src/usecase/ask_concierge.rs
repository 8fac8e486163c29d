//! UseCase: コンシェルジュへの質問
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AskConciergeUseCase::request_reply() / execute() メソッド
//! - 外部の推薦サービスとのやり取りと、失敗時のフォールバック
//!
//! ### なぜこのテストが必要か
//! - 推薦サービスのあらゆる失敗（応答なし・空文字・タイムアウト）が
//!   呼び出し元にエラーとして伝わらず、固定文言に置き換わることを保証
//! - カタログのスナップショット（名前・カテゴリ・料金）が渡されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：推薦文が返される
//! - 異常系：応答なし、タイムアウト
//! - エッジケース：空白のみの入力（外部呼び出しを行わない）

use std::{sync::Arc, time::Duration};

use crate::domain::{
    ChatMessage, ConciergeError, ConciergeSession, ListingRepository, ListingSnapshot,
    MessageContent, RecommendationService, Timestamp,
};

/// コンシェルジュ質問のユースケース
#[derive(Clone)]
pub struct AskConciergeUseCase {
    /// スナップショット取得元
    listings: Arc<dyn ListingRepository>,
    /// 推薦サービス（外部）
    recommender: Arc<dyn RecommendationService>,
    /// 推薦サービス呼び出しの上限時間（None なら無制限）
    timeout: Option<Duration>,
}

impl AskConciergeUseCase {
    /// 新しい AskConciergeUseCase を作成
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        recommender: Arc<dyn RecommendationService>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            listings,
            recommender,
            timeout,
        }
    }

    /// 推薦サービスに渡すカタログのスナップショット
    pub async fn snapshot(&self) -> Vec<ListingSnapshot> {
        self.listings
            .list_listings()
            .await
            .iter()
            .map(ListingSnapshot::from)
            .collect()
    }

    /// 推薦サービスへ 1 往復の問い合わせを行う
    ///
    /// 失敗・タイムアウト・空の応答はすべて `None` になる。リトライはしない。
    pub async fn request_reply(&self, prompt: &MessageContent) -> Option<String> {
        let snapshot = self.snapshot().await;
        let call = self.recommender.recommend(prompt.as_str(), &snapshot);

        let reply = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(reply) => reply,
                Err(_) => {
                    tracing::warn!("Concierge request timed out after {:?}", limit);
                    None
                }
            },
            None => call.await,
        };

        reply.filter(|text| !text.trim().is_empty())
    }

    /// 送信から応答の追加までを一度に実行
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 追加されたアシスタントメッセージ（フォールバック含む）
    /// * `Err(ConciergeError)` - 空の入力、または応答待ち中の送信
    pub async fn execute(
        &self,
        session: &mut ConciergeSession,
        input: &str,
    ) -> Result<ChatMessage, ConciergeError> {
        let prompt = session.submit(input, Timestamp::now())?;
        tracing::info!("Concierge session {} asked: {}", session.id(), prompt);

        let reply = self.request_reply(&prompt).await;
        if reply.is_none() {
            tracing::info!(
                "Concierge session {} falling back to default reply",
                session.id()
            );
        }
        session.settle(reply, Timestamp::now()).cloned()
    }
}
