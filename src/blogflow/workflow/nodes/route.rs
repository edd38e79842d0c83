// SPDX-License-Identifier: MIT

//! Language routing
//!
//! [`RouteNode`] is a pass-through so the conditional edge has a named
//! predecessor; [`route_decision`] picks the branch from `current_language`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Node;
use crate::blogflow::error::Result;
use crate::blogflow::workflow::graph::NodeId;
use crate::blogflow::workflow::state::{StateUpdate, WorkflowState};

/// Supported translation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    TraditionalChinese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TraditionalChinese, Language::Japanese];

    /// Name used in prompts and in `current_language`
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TraditionalChinese => "traditional chinese",
            Language::Japanese => "japanese",
        }
    }

    /// Case-insensitive, whitespace-tolerant match against the supported set
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.as_str() == normalized)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

/// Outcome of the route decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Chinese,
    Japanese,
    End,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::Chinese, Branch::Japanese, Branch::End];

    pub fn label(&self) -> &'static str {
        match self {
            Branch::Chinese => Language::TraditionalChinese.as_str(),
            Branch::Japanese => Language::Japanese.as_str(),
            Branch::End => "end",
        }
    }

    /// Node that runs when this branch is taken
    pub fn target(&self) -> NodeId {
        match self {
            Branch::Chinese => NodeId::ChineseTranslation,
            Branch::Japanese => NodeId::JapaneseTranslation,
            Branch::End => NodeId::End,
        }
    }
}

impl From<Option<Language>> for Branch {
    fn from(language: Option<Language>) -> Self {
        match language {
            Some(Language::TraditionalChinese) => Branch::Chinese,
            Some(Language::Japanese) => Branch::Japanese,
            None => Branch::End,
        }
    }
}

/// Pick the branch for the requested language. Unknown or absent languages end the run.
pub fn route_decision(state: &WorkflowState) -> Branch {
    state
        .current_language()
        .and_then(Language::parse)
        .into()
}

/// Pass-through node in front of the language branch
pub struct RouteNode;

#[async_trait]
impl Node for RouteNode {
    fn id(&self) -> NodeId {
        NodeId::Route
    }

    async fn run(&self, state: &WorkflowState) -> Result<StateUpdate> {
        Ok(StateUpdate::language(
            state.current_language().map(str::to_string),
        ))
    }
}
