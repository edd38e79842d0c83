// SPDX-License-Identifier: MIT

//! Graph builder
//!
//! The builder is consumed by [`GraphBuilder::build`], so a spec can only be
//! produced once per builder and never changes afterwards.

use std::collections::HashMap;

use super::types::{Decision, GraphSpec, NodeId, Transition};
use crate::blogflow::error::WorkflowError;

/// Collects nodes and edges, then validates them into a [`GraphSpec`]
#[derive(Debug)]
pub struct GraphBuilder {
    name: String,
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, Transition)>,
}

impl GraphBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(mut self, id: NodeId) -> Self {
        self.nodes.push(id);
        self
    }

    pub fn add_edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.edges.push((from, Transition::Edge(to)));
        self
    }

    pub fn add_conditional_edges(mut self, from: NodeId, decide: Decision) -> Self {
        self.edges.push((from, Transition::Conditional(decide)));
        self
    }

    /// Validate and freeze the graph
    pub fn build(self) -> Result<GraphSpec, WorkflowError> {
        let mut nodes: Vec<NodeId> = Vec::with_capacity(self.nodes.len());
        for id in self.nodes {
            if id.is_terminal() || nodes.contains(&id) {
                return Err(WorkflowError::DuplicateNode(id.to_string()));
            }
            nodes.push(id);
        }

        let mut transitions: HashMap<NodeId, Transition> = HashMap::new();
        for (from, transition) in self.edges {
            if from == NodeId::End || (from != NodeId::Start && !nodes.contains(&from)) {
                return Err(WorkflowError::UnknownNode(from.to_string()));
            }
            for to in transition.targets() {
                if to == NodeId::Start || (to != NodeId::End && !nodes.contains(&to)) {
                    return Err(WorkflowError::UnknownNode(to.to_string()));
                }
            }
            if transitions.insert(from, transition).is_some() {
                return Err(WorkflowError::DuplicateTransition(from.to_string()));
            }
        }

        if !transitions.contains_key(&NodeId::Start) {
            return Err(WorkflowError::MissingEntry);
        }
        if let Some(dangling) = nodes.iter().find(|id| !transitions.contains_key(*id)) {
            return Err(WorkflowError::MissingTransition(dangling.to_string()));
        }

        Ok(GraphSpec {
            name: self.name,
            nodes,
            transitions,
        })
    }
}
