//! Payloads for the generative-language `generateContent` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<ContentDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfigDto>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn text(prompt: String, generation_config: GenerationConfigDto) -> Self {
        Self {
            contents: vec![ContentDto {
                role: Some("user".to_string()),
                parts: vec![PartDto { text: Some(prompt) }],
            }],
            generation_config: Some(generation_config),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<PartDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<CandidateDto>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        Some(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateDto {
    #[serde(default)]
    pub content: Option<ContentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case_config() {
        // テスト項目: 生成設定は camelCase でシリアライズされ、未設定の項目は省略される
        // given (前提条件):
        let request = GenerateContentRequest::text(
            "hello".to_string(),
            GenerationConfigDto {
                temperature: Some(0.7),
                top_k: Some(40),
                ..GenerationConfigDto::default()
            },
        );

        // when (操作):
        let json = serde_json::to_value(&request).unwrap();

        // then (期待する結果):
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn test_response_text_joins_parts() {
        // テスト項目: 最初の候補の全パートのテキストが連結される
        // given (前提条件):
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Try the "},{"text":"tent."}]}}]}"#;

        // when (操作):
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(response.text().as_deref(), Some("Try the tent."));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        // テスト項目: 候補がない応答はテキストなしとして扱われる
        // when (操作):
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();

        // then (期待する結果):
        assert_eq!(response.text(), None);
    }
}
