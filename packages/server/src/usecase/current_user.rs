//! UseCase: サインイン中のユーザー情報取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CurrentUserUseCase::execute() / for_session() メソッド
//!
//! ### なぜこのテストが必要か
//! - 保存済みプロフィールとユーザーメタデータのマージ結果を保証
//! - プロフィール取得の失敗がサインイン状態を壊さないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：プロフィールあり・なし
//! - 異常系：プロフィール取得エラー、存在しないセッション

use std::sync::Arc;

use crate::domain::{
    ProfileRepository, Session, SessionRepository, SessionToken, UserProfile, merge_profile,
};

use super::error::AuthError;

/// ユーザー情報取得のユースケース
pub struct CurrentUserUseCase {
    /// Repository（セッション）
    sessions: Arc<dyn SessionRepository>,
    /// Repository（プロフィール）
    profiles: Arc<dyn ProfileRepository>,
}

impl CurrentUserUseCase {
    /// 新しい CurrentUserUseCase を作成
    pub fn new(sessions: Arc<dyn SessionRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { sessions, profiles }
    }

    /// セッショントークンからユーザー情報を取得
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - マージ済みのユーザー情報
    /// * `Err(AuthError::SessionNotFound)` - サインインしていない
    pub async fn execute(&self, token: &SessionToken) -> Result<UserProfile, AuthError> {
        let session = self
            .sessions
            .get(token)
            .await
            .map_err(|_| AuthError::SessionNotFound)?;
        Ok(self.for_session(&session).await)
    }

    /// セッションのユーザー情報を組み立てる
    ///
    /// プロフィールの取得に失敗した場合は、プロフィールなしとして扱う
    pub async fn for_session(&self, session: &Session) -> UserProfile {
        let profile = self
            .profiles
            .find_profile(&session.identity.id, &session.access_token)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Profile lookup failed for '{}': {}",
                    session.identity.id,
                    e
                );
                None
            });

        merge_profile(profile.as_ref(), &session.identity)
    }
}
