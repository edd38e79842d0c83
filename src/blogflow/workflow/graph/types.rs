// SPDX-License-Identifier: MIT

//! Graph workflow type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::blogflow::workflow::nodes::Branch;
use crate::blogflow::workflow::state::WorkflowState;

/// Identifier of a node in the blog workflow graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Start,
    TitleCreation,
    ContentCreation,
    Route,
    ChineseTranslation,
    JapaneseTranslation,
    End,
}

impl NodeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Start => "__start__",
            NodeId::TitleCreation => "title_creation",
            NodeId::ContentCreation => "content_creation",
            NodeId::Route => "route",
            NodeId::ChineseTranslation => "chinese_translation",
            NodeId::JapaneseTranslation => "japanese_translation",
            NodeId::End => "__end__",
        }
    }

    /// Start and end are implicit in every graph
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeId::Start | NodeId::End)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision function for a conditional edge
pub type Decision = fn(&WorkflowState) -> Branch;

/// Outgoing transition of a node
#[derive(Clone, Copy)]
pub enum Transition {
    /// Always go to the given node
    Edge(NodeId),
    /// Evaluate the decision and go to the branch's target
    Conditional(Decision),
}

impl Transition {
    /// Every node this transition can lead to
    pub fn targets(&self) -> Vec<NodeId> {
        match self {
            Transition::Edge(to) => vec![*to],
            Transition::Conditional(_) => Branch::ALL.iter().map(Branch::target).collect(),
        }
    }

    /// Resolve the next node for the given state
    pub fn next(&self, state: &WorkflowState) -> NodeId {
        match self {
            Transition::Edge(to) => *to,
            Transition::Conditional(decide) => {
                let branch = decide(state);
                log::info!("Route decision: {}", branch.label());
                branch.target()
            }
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Edge(to) => f.debug_tuple("Edge").field(to).finish(),
            Transition::Conditional(_) => f.write_str("Conditional"),
        }
    }
}

/// Immutable, validated graph definition produced by
/// [`GraphBuilder::build`](super::GraphBuilder::build)
#[derive(Debug, Clone)]
pub struct GraphSpec {
    pub(super) name: String,
    pub(super) nodes: Vec<NodeId>,
    pub(super) transitions: HashMap<NodeId, Transition>,
}

impl GraphSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared nodes in insertion order, excluding start and end
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn transition(&self, from: NodeId) -> Option<&Transition> {
        self.transitions.get(&from)
    }

    /// Render the graph as a Mermaid flowchart
    pub fn to_mermaid(&self) -> String {
        let mut lines = vec!["graph TD;".to_string()];
        let order = std::iter::once(NodeId::Start).chain(self.nodes.iter().copied());

        for from in order {
            match self.transitions.get(&from) {
                Some(Transition::Edge(to)) => {
                    lines.push(format!("    {} --> {};", from, to));
                }
                Some(Transition::Conditional(_)) => {
                    for branch in Branch::ALL {
                        lines.push(format!(
                            "    {} -. \"{}\" .-> {};",
                            from,
                            branch.label(),
                            branch.target()
                        ));
                    }
                }
                None => {}
            }
        }

        lines.join("\n")
    }
}
