//! Trace Store: concurrent in-memory keyed storage for executions.
//!
//! The store enforces the hard invariants of the trace model in one
//! place, independent of any pipeline logic: step ordering, the
//! terminal-state guard, and the list ordering contract. Callers
//! (recorder, query service) never touch the backing map directly.

#![warn(missing_docs)]

mod store;

pub use store::TraceStore;
