//! Test fixtures shared by the integration tests.
//!
//! Each test starts its own server in-process on an ephemeral port, backed
//! by the seeded in-memory catalog and in-memory accounts.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{net::TcpListener, task::JoinHandle};
use uniborrow_server::{
    domain::{ListingSnapshot, RecommendationService},
    infrastructure::recommendation::OfflineRecommendationService,
    ui::{AppState, create_router},
};

/// Recommendation service returning fixed text after an optional delay.
pub struct ScriptedRecommendationService {
    pub reply: Option<String>,
    pub delay: Duration,
}

impl ScriptedRecommendationService {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay: Duration::ZERO,
        }
    }

    pub fn slow(reply: &str, delay: Duration) -> Self {
        Self {
            reply: Some(reply.to_string()),
            delay,
        }
    }
}

#[async_trait]
impl RecommendationService for ScriptedRecommendationService {
    async fn recommend(&self, _prompt: &str, _listings: &[ListingSnapshot]) -> Option<String> {
        tokio::time::sleep(self.delay).await;
        self.reply.clone()
    }

    async fn describe(&self, _item_name: &str) -> Option<String> {
        self.reply.clone()
    }
}

pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server whose recommendation service always signals absence.
    pub async fn start() -> Self {
        Self::with_recommender(Arc::new(OfflineRecommendationService), None).await
    }

    pub async fn with_recommender(
        recommender: Arc<dyn RecommendationService>,
        concierge_timeout: Option<Duration>,
    ) -> Self {
        let state = Arc::new(AppState::in_memory(recommender, concierge_timeout));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, create_router(state))
                .await
                .expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws/concierge", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
