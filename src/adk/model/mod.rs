// SPDX-License-Identifier: MIT

//! Model module - defines LLM model trait and implementations
//!
//! This module provides the core Model trait and shared types.
//! Model implementations are in their own submodules:
//! - [anthropic] - Anthropic's Claude API
//! - [gemini] - Google's Gemini API
//! - [openai] - OpenAI's ChatGPT API, also used for Groq's compatible endpoint

pub mod anthropic;
pub mod gemini;
pub mod openai;

use crate::adk::error::ModelError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for model generation
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-text user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::Text(text.into())],
        }
    }

    /// A single-text model message
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::Text(text.into())],
        }
    }

    /// Concatenated text parts, ignoring thinking output
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::Thinking(_) => None,
            })
            .collect()
    }
}

/// Parts of a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Part {
    /// Regular text output from the model
    Text(String),
    /// Thinking/reasoning content from thinking models
    Thinking(String),
}

/// Core trait for LLM model implementations
#[async_trait]
pub trait Model: Send + Sync {
    /// Provider name used in logs and errors
    fn provider(&self) -> &str;

    async fn generate_content(
        &self,
        history: &[Content],
        config: Option<&GenerationConfig>,
    ) -> Result<Content, ModelError>;
}

/// Prompt-in, text-out convenience on top of [`Model`]
#[async_trait]
pub trait ModelExt: Model {
    /// Send `prompt` as a single user message and return the generated text
    async fn invoke(
        &self,
        prompt: &str,
        config: Option<&GenerationConfig>,
    ) -> Result<String, ModelError> {
        let response = self
            .generate_content(&[Content::user(prompt)], config)
            .await?;
        let text = response.text();
        if text.is_empty() {
            return Err(ModelError::invalid_response(format!(
                "{} returned no text",
                self.provider()
            )));
        }
        Ok(text)
    }
}

impl<M: Model + ?Sized> ModelExt for M {}

/// Build the HTTP client shared by the provider implementations
pub(crate) fn http_client(timeout: Option<Duration>) -> Result<Client, ModelError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Turn a non-success response into a [`ModelError`]
pub(crate) async fn error_from_response(provider: &str, resp: reqwest::Response) -> ModelError {
    let status = resp.status();
    let retry_after = resp
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = resp.text().await.unwrap_or_default();
    ModelError::from_status(provider, status, retry_after, body)
}
