// SPDX-License-Identifier: MIT

//! Workflow setup - builds the graph for a use case
//!
//! Every call to [`WorkflowFactory::setup`] assembles a fresh [`GraphSpec`],
//! so workflows built for different use cases never share graph state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::graph::{CompiledWorkflow, GraphBuilder, GraphSpec, NodeId};
use super::nodes::{node_for, route_decision, Llm, Node};
use crate::adk::model::{GenerationConfig, Model};
use crate::blogflow::config::ModelConfig;
use crate::blogflow::error::{Result, WorkflowError};
use crate::blogflow::model_factory::create_model;

/// Which workflow variant to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    /// Title, then body
    Topic,
    /// Title, body, then an optional translation
    Language,
}

impl UseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::Topic => "topic",
            UseCase::Language => "language",
        }
    }

    /// Graph definition for this use case
    pub fn graph_spec(&self) -> std::result::Result<GraphSpec, WorkflowError> {
        match self {
            UseCase::Topic => topic_graph(),
            UseCase::Language => language_graph(),
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = WorkflowError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "topic" => Ok(UseCase::Topic),
            "language" => Ok(UseCase::Language),
            _ => Err(WorkflowError::UnknownUseCase(s.to_string())),
        }
    }
}

/// start -> title_creation -> content_creation -> end
pub fn topic_graph() -> std::result::Result<GraphSpec, WorkflowError> {
    GraphBuilder::new("topic")
        .add_node(NodeId::TitleCreation)
        .add_node(NodeId::ContentCreation)
        .add_edge(NodeId::Start, NodeId::TitleCreation)
        .add_edge(NodeId::TitleCreation, NodeId::ContentCreation)
        .add_edge(NodeId::ContentCreation, NodeId::End)
        .build()
}

/// Topic graph followed by route and the translation branches
pub fn language_graph() -> std::result::Result<GraphSpec, WorkflowError> {
    GraphBuilder::new("language")
        .add_node(NodeId::TitleCreation)
        .add_node(NodeId::ContentCreation)
        .add_node(NodeId::Route)
        .add_node(NodeId::ChineseTranslation)
        .add_node(NodeId::JapaneseTranslation)
        .add_edge(NodeId::Start, NodeId::TitleCreation)
        .add_edge(NodeId::TitleCreation, NodeId::ContentCreation)
        .add_edge(NodeId::ContentCreation, NodeId::Route)
        .add_conditional_edges(NodeId::Route, route_decision)
        .add_edge(NodeId::ChineseTranslation, NodeId::End)
        .add_edge(NodeId::JapaneseTranslation, NodeId::End)
        .build()
}

/// Builds compiled workflows around one model
#[derive(Clone)]
pub struct WorkflowFactory {
    llm: Llm,
}

impl WorkflowFactory {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            llm: Llm::new(model),
        }
    }

    /// Create the model described by `config` and wrap it in a factory
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let factory = Self::new(create_model(config)?);
        Ok(match config.generation_config() {
            Some(generation) => factory.with_generation_config(generation),
            None => factory,
        })
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.llm = self.llm.with_config(config);
        self
    }

    /// Build and compile the workflow for `use_case`
    pub fn setup(&self, use_case: UseCase) -> Result<CompiledWorkflow> {
        let spec = use_case.graph_spec()?;
        let nodes: Vec<Arc<dyn Node>> = spec
            .nodes()
            .iter()
            .filter_map(|id| node_for(*id, &self.llm))
            .collect();

        log::info!("Setting up '{}' workflow", use_case);
        CompiledWorkflow::compile(spec, nodes)
    }
}

/// Build a topic workflow on demand for tools that need a standalone graph
pub fn standalone_graph(config: &ModelConfig) -> Result<CompiledWorkflow> {
    WorkflowFactory::from_config(config)?.setup(UseCase::Topic)
}
