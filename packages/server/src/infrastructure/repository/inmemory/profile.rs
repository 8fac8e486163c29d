//! InMemory Profile Repository 実装

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{ProfileRecord, ProfileRepository, RepositoryError};

/// インメモリ Profile Repository 実装
///
/// 開発用。プロフィール行が存在しないユーザーには `None` を返します。
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, ProfileRecord>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// プロフィール行を追加または置き換える
    pub async fn upsert(&self, record: ProfileRecord) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(record.id.clone(), record);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_profile(
        &self,
        user_id: &str,
        _access_token: &str,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }
}
