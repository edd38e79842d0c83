// SPDX-License-Identifier: MIT

//! Configuration loading
//!
//! Settings come from an optional YAML file, then `MODEL_PROVIDER` and
//! `MODEL_NAME` from the environment override the model section.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::adk::model::GenerationConfig;
use crate::blogflow::error::Result;

/// Top-level configuration file
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct BlogflowConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Model selection and generation parameters
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ModelConfig {
    /// Provider is optional - can be inferred from model_name or MODEL_PROVIDER env var
    pub provider: Option<String>,
    pub model_name: Option<String>,
    /// HTTP timeout for a single model call
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub parameters: GenerationConfig,
}

impl ModelConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Generation parameters, or `None` when nothing is set
    pub fn generation_config(&self) -> Option<GenerationConfig> {
        (self.parameters != GenerationConfig::default()).then(|| self.parameters.clone())
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl BlogflowConfig {
    /// Replace model settings with any values that are set
    pub fn with_overrides(mut self, provider: Option<String>, model_name: Option<String>) -> Self {
        if provider.is_some() {
            self.model.provider = provider;
        }
        if model_name.is_some() {
            self.model.model_name = model_name;
        }
        self
    }

    /// Apply `MODEL_PROVIDER` and `MODEL_NAME` from the environment
    pub fn with_env(self) -> Self {
        let provider = env::var("MODEL_PROVIDER").ok().filter(|v| !v.is_empty());
        let model_name = env::var("MODEL_NAME").ok().filter(|v| !v.is_empty());
        self.with_overrides(provider, model_name)
    }
}

/// Loads configuration from YAML files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BlogflowConfig> {
        let content = fs::read_to_string(path.as_ref())?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Self::parse_yaml(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<BlogflowConfig> {
        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(BlogflowConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load the given file, or defaults when no path is given, then apply env overrides
    pub fn resolve(path: Option<&Path>) -> Result<BlogflowConfig> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => BlogflowConfig::default(),
        };
        Ok(config.with_env())
    }
}
