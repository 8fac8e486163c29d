//! UseCase: アカウント登録
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SignUpUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - ローカル検証に失敗した場合、認証プロバイダを呼び出さないことを保証
//! - 確認メール待ちの場合はセッションが作られないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録と同時にセッション発行
//! - 正常系：確認待ち（セッションなし）
//! - 異常系：パスワード不一致・短すぎるパスワード・プロバイダのエラー

use std::sync::Arc;

use crate::domain::{IdentityProvider, Session, SessionRepository, SignUpForm};

use super::{error::AuthError, sign_in::open_session};

/// アカウント登録のユースケース
pub struct SignUpUseCase {
    /// 認証プロバイダ（外部）
    provider: Arc<dyn IdentityProvider>,
    /// Repository（データアクセス層の抽象化）
    sessions: Arc<dyn SessionRepository>,
}

impl SignUpUseCase {
    /// 新しい SignUpUseCase を作成
    pub fn new(provider: Arc<dyn IdentityProvider>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { provider, sessions }
    }

    /// アカウント登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Session))` - 登録と同時にサインインした
    /// * `Ok(None)` - 登録済みだが確認待ち
    /// * `Err(AuthError)` - ローカル検証エラー、またはプロバイダのエラー
    pub async fn execute(&self, form: &SignUpForm) -> Result<Option<Session>, AuthError> {
        // 1. 外部呼び出しの前にローカル検証
        form.validate()?;

        // 2. 認証プロバイダへ登録（表示名はユーザーメタデータとして渡す）
        let provider_session = self
            .provider
            .sign_up(form.email.trim(), &form.password, form.name.trim())
            .await
            .map_err(|e| {
                tracing::info!("Sign-up rejected for '{}': {}", form.email, e);
                AuthError::Provider(e.message)
            })?;

        // 3. セッションが発行された場合のみ登録
        match provider_session {
            Some(provider_session) => {
                Ok(Some(open_session(self.sessions.as_ref(), provider_session).await))
            }
            None => {
                tracing::info!("Sign-up for '{}' awaiting confirmation", form.email);
                Ok(None)
            }
        }
    }
}
