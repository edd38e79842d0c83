// SPDX-License-Identifier: MIT

pub mod graph;
pub mod nodes;
pub mod setup;
pub mod state;

pub use graph::{CompiledWorkflow, GraphBuilder, GraphSpec, NodeId};
pub use nodes::{route_decision, Branch, Language};
pub use setup::{standalone_graph, UseCase, WorkflowFactory};
pub use state::{BlogContent, StateUpdate, WorkflowState};
