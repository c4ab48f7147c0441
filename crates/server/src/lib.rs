//! HTTP surface and demo pipeline adapter for the X-Ray trace recorder.
//!
//! The serve module exposes the query/recorder stack as a JSON API for
//! the UI; the demo module is an instrumented example pipeline
//! (competitor selection) exercising the recorder contract end to end.

pub mod demo;
pub mod serve;
