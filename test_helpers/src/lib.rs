//! Test helpers shared across crates.
//!
//! This crate provides invocation counters for proving which closures a
//! combinator ran, log capture for `tracing` assertions, and text
//! normalisation for behavioural step placeholders.

pub mod counter;
pub mod text;
pub mod trace;
