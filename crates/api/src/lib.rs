//! Recording and query facades over the trace store.
//!
//! Two thin surfaces with distinct audiences:
//!
//! - [`ExecutionRecorder`] is what instrumented pipeline code calls:
//!   begin, record, finish. The store underneath enforces the
//!   invariants, so these calls stay trivial.
//! - [`QueryService`] is the read side consumed by API clients:
//!   lightweight summaries, full detail with a display-ready duration.

#![warn(missing_docs)]

mod query;
mod recorder;

pub use query::{format_duration, ExecutionDetail, ExecutionSummary, QueryService};
pub use recorder::{ExecutionHandle, ExecutionRecorder};
