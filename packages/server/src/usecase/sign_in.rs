//! UseCase: サインイン
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignInUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 認証成功時にサーバー側のセッションが登録されることを保証
//! - 認証プロバイダのエラーメッセージがそのまま伝わることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：サインイン成功
//! - 異常系：資格情報が誤っている（セッションは登録されない）

use std::sync::Arc;

use crate::domain::{
    IdentityProvider, ProviderSession, Session, SessionRepository, SessionTokenFactory, Timestamp,
};

use super::error::AuthError;

/// 認証プロバイダのセッションからサーバー側のセッションを作成して登録する
pub(super) async fn open_session(
    sessions: &dyn SessionRepository,
    provider_session: ProviderSession,
) -> Session {
    let session = Session {
        token: SessionTokenFactory::generate(),
        identity: provider_session.identity,
        access_token: provider_session.access_token,
        created_at: Timestamp::now(),
    };
    sessions.insert(session.clone()).await;
    tracing::info!(
        "Session {} opened for user '{}'",
        session.token,
        session.identity.id
    );
    session
}

/// サインインのユースケース
pub struct SignInUseCase {
    /// 認証プロバイダ（外部）
    provider: Arc<dyn IdentityProvider>,
    /// Repository（データアクセス層の抽象化）
    sessions: Arc<dyn SessionRepository>,
}

impl SignInUseCase {
    /// 新しい SignInUseCase を作成
    pub fn new(provider: Arc<dyn IdentityProvider>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { provider, sessions }
    }

    /// メールアドレスとパスワードでサインインを実行
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - 登録されたセッション
    /// * `Err(AuthError::Provider)` - 認証プロバイダが拒否した
    pub async fn execute(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let provider_session = self
            .provider
            .sign_in(email.trim(), password)
            .await
            .map_err(|e| {
                tracing::info!("Sign-in rejected for '{}': {}", email, e);
                AuthError::Provider(e.message)
            })?;

        Ok(open_session(self.sessions.as_ref(), provider_session).await)
    }
}
