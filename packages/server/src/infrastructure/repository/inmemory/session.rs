//! InMemory Session Repository 実装
//!
//! サインイン中のセッションを HashMap で保持します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{RepositoryError, Session, SessionRepository, SessionToken};

/// インメモリ Session Repository 実装
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionToken, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持しているセッション数
    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.token.clone(), session);
    }

    async fn get(&self, token: &SessionToken) -> Result<Session, RepositoryError> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(token)
            .cloned()
            .ok_or_else(|| RepositoryError::SessionNotFound(token.to_string()))
    }

    async fn remove(&self, token: &SessionToken) -> Result<Session, RepositoryError> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .remove(token)
            .ok_or_else(|| RepositoryError::SessionNotFound(token.to_string()))
    }
}
