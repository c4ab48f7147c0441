//! Convenient imports for X-Ray.
//!
//! Re-exports the types most recording and querying code needs:
//!
//! ```ignore
//! use xraytrace::prelude::*;
//!
//! let xray = XRay::new();
//! let handle = xray.recorder.begin(Value::Null)?;
//! ```

// Main entry point
pub use crate::XRay;

// Error handling
pub use crate::{Result, TraceError};

// Recording and querying facades
pub use crate::{ExecutionHandle, ExecutionRecorder, QueryService};

// Trace model
pub use crate::{
    Execution, ExecutionId, ExecutionStatus, Step, StepDraft, StepId, TerminalStatus, Timestamp,
    Value,
};
