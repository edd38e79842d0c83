// SPDX-License-Identifier: MIT

//! Graph workflow executor

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{GraphSpec, NodeId};
use crate::blogflow::error::{Result, WorkflowError};
use crate::blogflow::workflow::nodes::Node;
use crate::blogflow::workflow::state::WorkflowState;

/// Safety limit on node executions per run
pub const MAX_STEPS: usize = 32;

/// A graph spec bound to node implementations, ready to run
pub struct CompiledWorkflow {
    spec: GraphSpec,
    nodes: HashMap<NodeId, Arc<dyn Node>>,
}

impl CompiledWorkflow {
    /// Bind every node in `spec` to its implementation
    pub fn compile(spec: GraphSpec, nodes: Vec<Arc<dyn Node>>) -> Result<Self> {
        let nodes: HashMap<NodeId, Arc<dyn Node>> =
            nodes.into_iter().map(|n| (n.id(), n)).collect();

        if let Some(missing) = spec.nodes().iter().find(|id| !nodes.contains_key(*id)) {
            return Err(WorkflowError::NodeNotCompiled(missing.to_string()).into());
        }

        log::info!(
            "Compiled workflow '{}' with {} nodes",
            spec.name(),
            spec.nodes().len()
        );

        Ok(Self { spec, nodes })
    }

    pub fn name(&self) -> &str {
        self.spec.name()
    }

    pub fn spec(&self) -> &GraphSpec {
        &self.spec
    }

    /// Node that follows `from` for the given state
    fn advance(&self, from: NodeId, state: &WorkflowState) -> Result<NodeId> {
        let transition = self
            .spec
            .transition(from)
            .ok_or_else(|| WorkflowError::MissingTransition(from.to_string()))?;
        Ok(transition.next(state))
    }

    /// Run the workflow to completion and return the final state
    pub async fn run(&self, initial: WorkflowState) -> Result<WorkflowState> {
        let mut state = initial;
        let mut current = self.advance(NodeId::Start, &state)?;
        let mut steps = 0;

        while current != NodeId::End {
            steps += 1;
            if steps > MAX_STEPS {
                log::error!("Workflow '{}' exceeded {} steps", self.name(), MAX_STEPS);
                return Err(WorkflowError::StepLimitExceeded(MAX_STEPS).into());
            }

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| WorkflowError::NodeNotCompiled(current.to_string()))?;

            log::info!("Executing node: {}", current);
            let update = node.run(&state).await.map_err(|e| {
                log::error!("Node {} failed: {}", current, e);
                e
            })?;

            if update.is_empty() {
                log::debug!("Node {} returned no update", current);
            }
            state.apply(update);
            log::info!("Node {} completed", current);

            current = self.advance(current, &state)?;
        }

        log::info!(
            "Workflow '{}' finished after {} steps",
            self.name(),
            steps
        );
        Ok(state)
    }
}
