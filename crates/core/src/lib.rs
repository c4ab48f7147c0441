//! Core types for the X-Ray trace recorder.
//!
//! This crate defines the data model shared by every layer: the opaque
//! [`Value`] document type, execution and step identifiers, the
//! [`Execution`]/[`Step`] records themselves, and the error taxonomy.
//!
//! Nothing in here touches storage or I/O; higher crates (`xray-store`,
//! `xray-api`) build on these types.

#![warn(missing_docs)]

mod error;
mod trace;
mod types;
mod value;

pub use error::{Result, TraceError};
pub use trace::{Execution, Step, StepDraft};
pub use types::{ExecutionId, ExecutionStatus, StepId, TerminalStatus, Timestamp};
pub use value::Value;
