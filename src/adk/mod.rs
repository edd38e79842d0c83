// SPDX-License-Identifier: MIT

//! Model access layer: the [`model::Model`] trait, provider clients and
//! their error type.

pub mod error;
pub mod model;

pub use error::ModelError;
