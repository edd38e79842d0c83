// SPDX-License-Identifier: MIT

//! Gemini Model - Google's Gemini API implementation

use super::{error_from_response, http_client, Content, GenerationConfig, Model, Part};
use crate::adk::error::ModelError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::env;
use std::time::Duration;

/// Google Gemini model implementation
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model_name: String,
}

impl GeminiModel {
    /// Create a new GeminiModel
    ///
    /// Requires `GOOGLE_API_KEY` environment variable to be set.
    pub fn new(model_name: String, timeout: Option<Duration>) -> Result<Self, ModelError> {
        let api_key =
            env::var("GOOGLE_API_KEY").map_err(|_| ModelError::ApiKeyMissing("gemini".into()))?;
        Ok(Self {
            client: http_client(timeout)?,
            api_key,
            model_name,
        })
    }

    fn request_body(history: &[Content], config: Option<&GenerationConfig>) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = history
            .iter()
            .map(|c| {
                let parts: Vec<serde_json::Value> = c
                    .parts
                    .iter()
                    .filter_map(|p| match p {
                        Part::Text(t) => Some(json!({ "text": t })),
                        Part::Thinking(_) => None, // Thinking is internal, not sent to API
                    })
                    .collect();
                json!({ "role": c.role, "parts": parts })
            })
            .collect();

        let mut body = json!({
            "contents": contents
        });

        if let Some(cfg) = config {
            let mut generation = serde_json::Map::new();
            if let Some(temp) = cfg.temperature {
                generation.insert("temperature".into(), json!(temp));
            }
            if let Some(max_tokens) = cfg.max_output_tokens {
                generation.insert("maxOutputTokens".into(), json!(max_tokens));
            }
            if let Some(top_p) = cfg.top_p {
                generation.insert("topP".into(), json!(top_p));
            }
            if let Some(top_k) = cfg.top_k {
                generation.insert("topK".into(), json!(top_k));
            }
            if !generation.is_empty() {
                body["generationConfig"] = serde_json::Value::Object(generation);
            }
        }

        body
    }

    fn parse_gemini_response(resp_json: &serde_json::Value) -> Result<Content, ModelError> {
        let candidate = resp_json["candidates"]
            .as_array()
            .and_then(|c| c.first())
            .ok_or_else(|| ModelError::invalid_response("No candidates in Gemini response"))?;

        if let Some(finish_reason) = candidate.get("finishReason").and_then(|v| v.as_str()) {
            log::debug!("Gemini finish reason: {}", finish_reason);
            if finish_reason == "SAFETY" {
                return Err(ModelError::invalid_response(
                    "Gemini blocked response due to safety filters",
                ));
            }
        }

        let parts_json = candidate["content"]["parts"].as_array().ok_or_else(|| {
            log::error!("No content parts in candidate: {}", candidate);
            ModelError::invalid_response(format!("No parts in Gemini candidate: {}", candidate))
        })?;

        let mut parts = Vec::new();
        for p in parts_json {
            let text = p["text"].as_str().unwrap_or_default();
            if text.is_empty() {
                continue;
            }
            // Thinking models flag reasoning parts with "thought": true
            if p["thought"].as_bool().unwrap_or(false) {
                parts.push(Part::Thinking(text.to_string()));
            } else {
                parts.push(Part::Text(text.to_string()));
            }
        }

        Ok(Content {
            role: "model".to_string(),
            parts,
        })
    }
}

#[async_trait]
impl Model for GeminiModel {
    fn provider(&self) -> &str {
        "gemini"
    }

    async fn generate_content(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> Result<Content, ModelError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model_name
        );
        let body = Self::request_body(history, config);

        log::debug!(
            "Gemini request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(error_from_response("gemini", resp).await);
        }

        let resp_json: serde_json::Value = resp.json().await?;
        log::debug!("Gemini response: {}", resp_json);

        Self::parse_gemini_response(&resp_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_maps_generation_config() {
        let config = GenerationConfig {
            temperature: Some(0.2),
            max_output_tokens: Some(256),
            top_p: None,
            top_k: None,
        };
        let body = GeminiModel::request_body(&[Content::user("hello")], Some(&config));

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
        assert!(body["generationConfig"].get("topK").is_none());
    }

    #[test]
    fn test_request_body_without_config() {
        let body = GeminiModel::request_body(&[Content::user("hello")], None);
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_parse_gemini_separates_thoughts() {
        let response = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "thinking about it", "thought": true},
                        {"text": "Final answer"}
                    ]
                },
                "finishReason": "STOP"
            }]
        });

        let content = GeminiModel::parse_gemini_response(&response).unwrap();
        assert_eq!(content.parts.len(), 2);
        assert_eq!(content.text(), "Final answer");
    }

    #[test]
    fn test_parse_gemini_safety_block() {
        let response = json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        });
        let err = GeminiModel::parse_gemini_response(&response).unwrap_err();
        assert!(err.to_string().contains("safety"));
    }
}
