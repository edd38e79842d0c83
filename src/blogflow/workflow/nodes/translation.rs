// SPDX-License-Identifier: MIT

//! Body translation

use async_trait::async_trait;

use super::{prompts, Language, Llm, Node};
use crate::blogflow::error::{BlogflowError, Result};
use crate::blogflow::workflow::graph::NodeId;
use crate::blogflow::workflow::state::{StateUpdate, WorkflowState};

/// Translates the body into a fixed target language.
///
/// The target is set at construction, not read from `current_language`, so
/// each branch of the graph owns its own instance. The title is left as is.
pub struct TranslationNode {
    llm: Llm,
    language: Language,
}

impl TranslationNode {
    pub fn new(llm: Llm, language: Language) -> Self {
        Self { llm, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[async_trait]
impl Node for TranslationNode {
    fn id(&self) -> NodeId {
        match self.language {
            Language::TraditionalChinese => NodeId::ChineseTranslation,
            Language::Japanese => NodeId::JapaneseTranslation,
        }
    }

    async fn run(&self, state: &WorkflowState) -> Result<StateUpdate> {
        let body = state
            .body()
            .ok_or_else(|| BlogflowError::missing_field(self.id().as_str(), "content.content"))?;

        let translated = self
            .llm
            .invoke(
                self.id(),
                &prompts::translation_prompt(self.language, body),
            )
            .await?;
        Ok(StateUpdate::body(translated))
    }
}
