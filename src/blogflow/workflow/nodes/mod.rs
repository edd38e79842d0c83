// SPDX-License-Identifier: MIT

//! Workflow nodes
//!
//! Each node reads the current [`WorkflowState`] and returns a
//! [`StateUpdate`]; the executor merges the update and moves on.
//! - [`TitleNode`] and [`ContentNode`] write the post
//! - [`RouteNode`] and [`route_decision`] pick the language branch
//! - [`TranslationNode`] translates the body

pub mod prompts;
mod route;
mod translation;
mod writer;

pub use route::{route_decision, Branch, Language, RouteNode};
pub use translation::TranslationNode;
pub use writer::{ContentNode, TitleNode};

use async_trait::async_trait;
use std::sync::Arc;

use crate::adk::model::{GenerationConfig, Model, ModelExt};
use crate::blogflow::error::Result;
use crate::blogflow::workflow::graph::NodeId;
use crate::blogflow::workflow::state::{StateUpdate, WorkflowState};

/// A single step in the workflow graph
#[async_trait]
pub trait Node: Send + Sync {
    fn id(&self) -> NodeId;

    async fn run(&self, state: &WorkflowState) -> Result<StateUpdate>;
}

/// Model handle shared by the nodes that call the LLM
#[derive(Clone)]
pub struct Llm {
    model: Arc<dyn Model>,
    config: Option<GenerationConfig>,
}

impl Llm {
    pub fn new(model: Arc<dyn Model>) -> Self {
        Self {
            model,
            config: None,
        }
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Send a single prompt on behalf of `node`
    pub async fn invoke(&self, node: NodeId, prompt: &str) -> Result<String> {
        log::debug!("Node {} prompt: {}", node, prompt);
        let text = self.model.invoke(prompt, self.config.as_ref()).await?;
        log::info!(
            "Node {} received {} chars from {}",
            node,
            text.chars().count(),
            self.model.provider()
        );
        Ok(text)
    }
}

/// Build the implementation for a node identifier. Start and end have none.
pub fn node_for(id: NodeId, llm: &Llm) -> Option<Arc<dyn Node>> {
    let node: Arc<dyn Node> = match id {
        NodeId::TitleCreation => Arc::new(TitleNode::new(llm.clone())),
        NodeId::ContentCreation => Arc::new(ContentNode::new(llm.clone())),
        NodeId::Route => Arc::new(RouteNode),
        NodeId::ChineseTranslation => Arc::new(TranslationNode::new(
            llm.clone(),
            Language::TraditionalChinese,
        )),
        NodeId::JapaneseTranslation => {
            Arc::new(TranslationNode::new(llm.clone(), Language::Japanese))
        }
        NodeId::Start | NodeId::End => return None,
    };
    Some(node)
}
