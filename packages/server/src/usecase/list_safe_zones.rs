//! UseCase: 安全な受け渡し場所の一覧

use std::sync::Arc;

use crate::domain::{SafeZone, SafeZoneRepository};

/// 受け渡し場所一覧のユースケース
pub struct ListSafeZonesUseCase {
    repository: Arc<dyn SafeZoneRepository>,
}

impl ListSafeZonesUseCase {
    pub fn new(repository: Arc<dyn SafeZoneRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Vec<SafeZone> {
        self.repository.list_safe_zones().await
    }
}
