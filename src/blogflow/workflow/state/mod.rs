// SPDX-License-Identifier: MIT

//! State management for blog workflows
//!
//! This module provides:
//! - `WorkflowState` - the record threaded through every node
//! - `BlogContent` - the title/body pair built up by the nodes
//! - `StateUpdate` - the partial update a node returns, merged with `WorkflowState::apply`

mod store;
mod update;

pub use store::{BlogContent, WorkflowState};
pub use update::StateUpdate;
