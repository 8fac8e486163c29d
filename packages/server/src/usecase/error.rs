//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::SignUpValidationError;

/// 認証・セッション関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// ローカルのフォーム検証エラー（外部呼び出し前）
    #[error(transparent)]
    Validation(#[from] SignUpValidationError),

    /// 認証プロバイダが返したエラー（メッセージはそのまま表示する）
    #[error("{0}")]
    Provider(String),

    /// セッションが存在しない、または終了済み
    #[error("Not signed in")]
    SessionNotFound,
}

/// カタログ関連のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Listing not found: {0}")]
    ListingNotFound(String),
}
