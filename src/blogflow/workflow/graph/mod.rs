// SPDX-License-Identifier: MIT

//! Graph-based workflow execution
//!
//! A [`GraphBuilder`] is consumed into an immutable [`GraphSpec`], which
//! [`CompiledWorkflow`] binds to node implementations and runs one node at a
//! time.

mod builder;
pub mod executor;
pub mod types;

pub use builder::GraphBuilder;
pub use executor::{CompiledWorkflow, MAX_STEPS};
pub use types::{Decision, GraphSpec, NodeId, Transition};
