//! Shared test utilities used across the wugraph crates.
//!
//! - [`ci`] reads environment overrides that tune property-test runs.
//! - [`tracing`] captures spans and events so instrumentation can be
//!   asserted.

pub mod ci;
pub mod tracing;
