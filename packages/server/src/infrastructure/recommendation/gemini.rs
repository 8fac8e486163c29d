//! Recommendation service backed by the Gemini `generateContent` API.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::{
    domain::{ListingSnapshot, RecommendationService},
    infrastructure::dto::gemini::{
        GenerateContentRequest, GenerateContentResponse, GenerationConfigDto,
    },
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Failures inside a single round-trip. Never leaves this module.
#[derive(Debug, Error)]
enum GeminiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response carried no text")]
    Empty,
}

/// Gemini client.
#[derive(Clone)]
pub struct GeminiRecommendationService {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiRecommendationService {
    pub fn new(http: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (e.g. a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn generate(
        &self,
        prompt: String,
        config: GenerationConfigDto,
    ) -> Result<String, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::text(prompt, config))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(GeminiError::Empty)
    }
}

/// Concierge prompt with the catalog snapshot embedded as JSON.
pub fn concierge_prompt(
    prompt: &str,
    listings: &[ListingSnapshot],
) -> Result<String, serde_json::Error> {
    let catalog = serde_json::to_string(listings)?;
    Ok(format!(
        "You are the UniBorrow AI Concierge. Help students find the best rental gear for their needs on our university campus marketplace.\n\
         Available Items: {catalog}\n\
         User Question: {prompt}\n\
         Provide a helpful, friendly response recommending specific items or categories. Note that all prices are in Pesos (₱)."
    ))
}

/// Description prompt for a new listing.
pub fn description_prompt(item_name: &str) -> String {
    format!(
        "Generate a catchy, short, and professional rental description for a \"{item_name}\" listed on \"UniBorrow\", a university campus marketplace. Focus on student needs."
    )
}

fn recommendation_config() -> GenerationConfigDto {
    GenerationConfigDto {
        temperature: Some(0.7),
        top_p: Some(0.8),
        top_k: Some(40),
        max_output_tokens: None,
    }
}

fn description_config() -> GenerationConfigDto {
    GenerationConfigDto {
        max_output_tokens: Some(100),
        ..GenerationConfigDto::default()
    }
}

#[async_trait]
impl RecommendationService for GeminiRecommendationService {
    async fn recommend(&self, prompt: &str, listings: &[ListingSnapshot]) -> Option<String> {
        let result = match concierge_prompt(prompt, listings) {
            Ok(full_prompt) => self.generate(full_prompt, recommendation_config()).await,
            Err(e) => Err(e.into()),
        };
        result
            .inspect_err(|e| tracing::warn!("Gemini recommendation failed: {}", e))
            .ok()
    }

    async fn describe(&self, item_name: &str) -> Option<String> {
        self.generate(description_prompt(item_name), description_config())
            .await
            .inspect_err(|e| tracing::warn!("Gemini description failed: {}", e))
            .ok()
    }
}
