// SPDX-License-Identifier: MIT

//! Typed error handling for blogflow-rs
//!
//! [`BlogflowError`] is what a workflow invocation fails with. Model failures
//! are carried unmodified in [`BlogflowError::Model`].

use crate::adk::error::ModelError;
use thiserror::Error;

/// Top-level error type for blogflow-rs
#[derive(Debug, Error)]
pub enum BlogflowError {
    /// The model collaborator failed
    #[error("Model invocation failed: {0}")]
    Model(#[from] ModelError),

    /// A step needed a state field an earlier step should have produced
    #[error("Node '{node}' requires '{field}' but it is not set")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    /// Graph construction or execution errors
    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Configuration errors (missing env vars, invalid config)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Graph construction and execution errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Use case identifier not recognised
    #[error("Unknown use case: {0}")]
    UnknownUseCase(String),

    /// The same node was added twice
    #[error("Node '{0}' is already defined")]
    DuplicateNode(String),

    /// An edge refers to a node that was never added
    #[error("Edge refers to unknown node '{0}'")]
    UnknownNode(String),

    /// No edge leaves the start node
    #[error("Graph has no entry edge from start")]
    MissingEntry,

    /// A node has no outgoing edge
    #[error("Node '{0}' has no outgoing transition")]
    MissingTransition(String),

    /// A node was given more than one outgoing edge
    #[error("Node '{0}' has more than one outgoing transition")]
    DuplicateTransition(String),

    /// The graph references a node with no runnable implementation
    #[error("Node '{0}' has no implementation")]
    NodeNotCompiled(String),

    /// Execution did not reach the end node
    #[error("Workflow did not finish within {0} steps")]
    StepLimitExceeded(usize),
}

impl BlogflowError {
    /// Create a missing field error
    pub fn missing_field(node: &'static str, field: &'static str) -> Self {
        Self::MissingField { node, field }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether retrying the whole invocation could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Model(err) => err.is_transient(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlogflowError>;
