// SPDX-License-Identifier: MIT

//! Title and body generation

use async_trait::async_trait;

use super::{prompts, Llm, Node};
use crate::blogflow::error::{BlogflowError, Result};
use crate::blogflow::workflow::graph::NodeId;
use crate::blogflow::workflow::state::{StateUpdate, WorkflowState};

/// Generates the Markdown title for the topic
pub struct TitleNode {
    llm: Llm,
}

impl TitleNode {
    pub fn new(llm: Llm) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node for TitleNode {
    fn id(&self) -> NodeId {
        NodeId::TitleCreation
    }

    async fn run(&self, state: &WorkflowState) -> Result<StateUpdate> {
        let Some(topic) = state.non_empty_topic() else {
            log::warn!("Node {}: empty topic, skipping", self.id());
            return Ok(StateUpdate::none());
        };

        let title = self
            .llm
            .invoke(self.id(), &prompts::title_prompt(topic))
            .await?;
        Ok(StateUpdate::title(title))
    }
}

/// Generates the Markdown body from the topic and the title
pub struct ContentNode {
    llm: Llm,
}

impl ContentNode {
    pub fn new(llm: Llm) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node for ContentNode {
    fn id(&self) -> NodeId {
        NodeId::ContentCreation
    }

    async fn run(&self, state: &WorkflowState) -> Result<StateUpdate> {
        let Some(topic) = state.non_empty_topic() else {
            log::warn!("Node {}: empty topic, skipping", self.id());
            return Ok(StateUpdate::none());
        };
        let title = state
            .title()
            .ok_or_else(|| BlogflowError::missing_field("content_creation", "content.title"))?;

        let body = self
            .llm
            .invoke(self.id(), &prompts::content_prompt(topic, title))
            .await?;
        Ok(StateUpdate::title_and_body(title, body))
    }
}
