#![deny(missing_docs)]
//! Dense optical-flow field types and validation

/// flow field representation for optical-flow processing.
pub mod flow;

/// Error types for the field module.
pub mod error;

pub use crate::error::FieldError;
pub use crate::flow::{FieldSize, FlowField, FLOW_CHANNELS};
