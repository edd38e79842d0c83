// SPDX-License-Identifier: MIT

//! OpenAI Model - Chat Completions API implementation
//!
//! Groq serves the same wire format, so [`OpenAIModel::groq`] reuses this
//! client with Groq's base URL and key.

use super::{error_from_response, http_client, Content, GenerationConfig, Model, Part};
use crate::adk::error::ModelError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::env;
use std::time::Duration;

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// OpenAI-compatible chat model implementation
pub struct OpenAIModel {
    client: Client,
    provider: String,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl OpenAIModel {
    /// Create a new OpenAIModel
    ///
    /// Requires `OPENAI_API_KEY` environment variable to be set.
    /// Optionally uses `OPENAI_BASE_URL` for custom endpoints.
    pub fn new(model_name: String, timeout: Option<Duration>) -> Result<Self, ModelError> {
        let api_key =
            env::var("OPENAI_API_KEY").map_err(|_| ModelError::ApiKeyMissing("openai".into()))?;
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| OPENAI_DEFAULT_BASE_URL.to_string());
        Self::with_endpoint("openai", api_key, base_url, model_name, timeout)
    }

    /// Create a model served by Groq
    ///
    /// Requires `GROQ_API_KEY`; `GROQ_BASE_URL` overrides the endpoint.
    pub fn groq(model_name: String, timeout: Option<Duration>) -> Result<Self, ModelError> {
        let api_key =
            env::var("GROQ_API_KEY").map_err(|_| ModelError::ApiKeyMissing("groq".into()))?;
        let base_url =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| GROQ_DEFAULT_BASE_URL.to_string());
        Self::with_endpoint("groq", api_key, base_url, model_name, timeout)
    }

    /// Create a model against an explicit endpoint
    pub fn with_endpoint(
        provider: &str,
        api_key: String,
        base_url: String,
        model_name: String,
        timeout: Option<Duration>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            client: http_client(timeout)?,
            provider: provider.to_string(),
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert internal Content to OpenAI message format
    fn content_to_openai_message(content: &Content) -> serde_json::Value {
        let role = match content.role.as_str() {
            "system" => "system",
            "user" => "user",
            "model" => "assistant",
            other => other,
        };

        let text: String = content
            .parts
            .iter()
            .map(|part| match part {
                Part::Text(t) | Part::Thinking(t) => t.as_str(),
            })
            .collect();

        json!({
            "role": role,
            "content": text
        })
    }

    /// Build the request body for a chat completion
    fn request_body(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = history
            .iter()
            .map(Self::content_to_openai_message)
            .collect();

        let mut body = json!({
            "model": self.model_name,
            "messages": messages
        });

        if let Some(cfg) = config {
            if let Some(temp) = cfg.temperature {
                body["temperature"] = json!(temp);
            }
            if let Some(max_tokens) = cfg.max_output_tokens {
                body["max_tokens"] = json!(max_tokens);
            }
            if let Some(top_p) = cfg.top_p {
                body["top_p"] = json!(top_p);
            }
        }

        body
    }

    /// Parse OpenAI response into Content
    fn parse_openai_response(response: &serde_json::Value) -> Result<Content, ModelError> {
        let choice = response["choices"]
            .as_array()
            .and_then(|c| c.first())
            .ok_or_else(|| ModelError::invalid_response("No choices in OpenAI response"))?;

        let message = &choice["message"];
        let mut parts = Vec::new();

        // Reasoning models on Groq return their chain of thought separately
        if let Some(reasoning) = message["reasoning"].as_str() {
            if !reasoning.is_empty() {
                parts.push(Part::Thinking(reasoning.to_string()));
            }
        }

        if let Some(content) = message["content"].as_str() {
            if !content.is_empty() {
                parts.push(Part::Text(content.to_string()));
            }
        }

        Ok(Content {
            role: "model".to_string(),
            parts,
        })
    }
}

#[async_trait]
impl Model for OpenAIModel {
    fn provider(&self) -> &str {
        &self.provider
    }

    async fn generate_content(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> Result<Content, ModelError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.request_body(history, config);

        log::debug!(
            "{} request body: {}",
            self.provider,
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(error_from_response(&self.provider, resp).await);
        }

        let resp_json: serde_json::Value = resp.json().await?;
        log::debug!("{} response: {}", self.provider, resp_json);

        Self::parse_openai_response(&resp_json)
    }
}
