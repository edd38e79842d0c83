// SPDX-License-Identifier: MIT

//! Model factory - constructs the model client from configuration

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::adk::error::ModelError;
use crate::adk::model::anthropic::AnthropicModel;
use crate::adk::model::gemini::GeminiModel;
use crate::adk::model::openai::OpenAIModel;
use crate::adk::model::Model;
use crate::blogflow::config::ModelConfig;

/// Supported model providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenAI,
    Anthropic,
    Gemini,
}

impl Provider {
    /// Model used when none is configured
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Groq => "llama-3.1-8b-instant",
            Provider::OpenAI => "gpt-4o-mini",
            Provider::Anthropic => "claude-3-5-haiku-latest",
            Provider::Gemini => "gemini-2.0-flash",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Groq => "Groq",
            Provider::OpenAI => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Gemini => "Gemini",
        };
        f.write_str(name)
    }
}

impl FromStr for Provider {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "openai" => Ok(Provider::OpenAI),
            "anthropic" => Ok(Provider::Anthropic),
            "gemini" | "google" => Ok(Provider::Gemini),
            _ => Err(ModelError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Infer the provider from the model name prefix
pub fn infer_provider_from_model(model_name: &str) -> Provider {
    let name_lower = model_name.to_lowercase();
    if name_lower.starts_with("gemini") || name_lower.starts_with("models/gemini") {
        Provider::Gemini
    } else if name_lower.starts_with("gpt") || name_lower.starts_with("o1") {
        Provider::OpenAI
    } else if name_lower.starts_with("claude") {
        Provider::Anthropic
    } else {
        Provider::Groq
    }
}

/// Resolve provider and model name: explicit provider > model name prefix > Groq
pub fn resolve_model(config: &ModelConfig) -> Result<(Provider, String), ModelError> {
    let provider = match (&config.provider, &config.model_name) {
        (Some(provider), _) => provider.parse()?,
        (None, Some(model_name)) => infer_provider_from_model(model_name),
        (None, None) => Provider::Groq,
    };
    let model_name = config
        .model_name
        .clone()
        .unwrap_or_else(|| provider.default_model().to_string());
    Ok((provider, model_name))
}

/// Create the model client described by `config`
pub fn create_model(config: &ModelConfig) -> Result<Arc<dyn Model>, ModelError> {
    let (provider, model_name) = resolve_model(config)?;
    let timeout = config.timeout();

    log::info!("Using provider: {} with model: {}", provider, model_name);

    let model: Arc<dyn Model> = match provider {
        Provider::Groq => Arc::new(OpenAIModel::groq(model_name, timeout)?),
        Provider::OpenAI => Arc::new(OpenAIModel::new(model_name, timeout)?),
        Provider::Anthropic => Arc::new(AnthropicModel::new(model_name, timeout)?),
        Provider::Gemini => Arc::new(GeminiModel::new(model_name, timeout)?),
    };
    Ok(model)
}
