//! UseCase: サインアウト
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignOutUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 認証プロバイダへの通知が失敗してもローカルのセッションは必ず破棄されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：サインアウト成功
//! - 異常系：プロバイダのエラー（セッションは破棄される）
//! - エッジケース：存在しないセッション

use std::sync::Arc;

use crate::domain::{IdentityProvider, SessionRepository, SessionToken};

use super::error::AuthError;

/// サインアウトのユースケース
pub struct SignOutUseCase {
    /// 認証プロバイダ（外部）
    provider: Arc<dyn IdentityProvider>,
    /// Repository（データアクセス層の抽象化）
    sessions: Arc<dyn SessionRepository>,
}

impl SignOutUseCase {
    /// 新しい SignOutUseCase を作成
    pub fn new(provider: Arc<dyn IdentityProvider>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { provider, sessions }
    }

    /// サインアウトを実行
    ///
    /// ローカルのセッションを先に破棄し、その後プロバイダへ通知する。
    /// プロバイダのエラーはログに記録するのみ。
    pub async fn execute(&self, token: &SessionToken) -> Result<(), AuthError> {
        let session = self
            .sessions
            .remove(token)
            .await
            .map_err(|_| AuthError::SessionNotFound)?;

        if let Err(e) = self.provider.sign_out(&session.access_token).await {
            tracing::warn!(
                "Identity provider sign-out failed for session {}: {}",
                token,
                e
            );
        }

        tracing::info!("Session {} closed", token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            Identity, ProviderError, Session, SessionTokenFactory, Timestamp,
            service::MockIdentityProvider,
        },
        infrastructure::repository::InMemorySessionRepository,
    };

    async fn seeded_sessions() -> (Arc<InMemorySessionRepository>, SessionToken) {
        let sessions = Arc::new(InMemorySessionRepository::new());
        let token = SessionTokenFactory::generate();
        sessions
            .insert(Session {
                token: token.clone(),
                identity: Identity {
                    id: "user-1".to_string(),
                    email: None,
                    display_name: None,
                    avatar: None,
                },
                access_token: "access-1".to_string(),
                created_at: Timestamp::new(0),
            })
            .await;
        (sessions, token)
    }

    #[tokio::test]
    async fn test_sign_out_removes_session() {
        // テスト項目: サインアウトするとセッションが破棄され、プロバイダに通知される
        // given (前提条件):
        let (sessions, token) = seeded_sessions().await;
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_out()
            .withf(|access_token| access_token == "access-1")
            .times(1)
            .returning(|_| Ok(()));
        let usecase = SignOutUseCase::new(Arc::new(provider), sessions.clone());

        // when (操作):
        let result = usecase.execute(&token).await;

        // then (期待する結果):
        assert_eq!(result, Ok(()));
        assert_eq!(sessions.count().await, 0);
    }

    #[tokio::test]
    async fn test_sign_out_provider_failure_still_clears_session() {
        // テスト項目: プロバイダへの通知が失敗してもローカルのセッションは破棄される
        // given (前提条件):
        let (sessions, token) = seeded_sessions().await;
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_out()
            .returning(|_| Err(ProviderError::new("network down")));
        let usecase = SignOutUseCase::new(Arc::new(provider), sessions.clone());

        // when (操作):
        let result = usecase.execute(&token).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(sessions.get(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_sign_out_unknown_session() {
        // テスト項目: 存在しないセッションのサインアウトはエラーになる
        // given (前提条件):
        let mut provider = MockIdentityProvider::new();
        provider.expect_sign_out().never();
        let usecase = SignOutUseCase::new(
            Arc::new(provider),
            Arc::new(InMemorySessionRepository::new()),
        );

        // when (操作):
        let result = usecase.execute(&SessionTokenFactory::generate()).await;

        // then (期待する結果):
        assert_eq!(result, Err(AuthError::SessionNotFound));
    }
}
