// SPDX-License-Identifier: MIT

//! Blog generation: configuration, model selection, the title/content/translation
//! workflow and its HTTP surface.

pub mod config;
pub mod error;
pub mod model_factory;
pub mod server;
pub mod workflow;

pub use error::{BlogflowError, Result, WorkflowError};
