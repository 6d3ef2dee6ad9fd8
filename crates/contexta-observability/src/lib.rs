//! Logging and span helpers shared by the contexta binaries.

pub mod correlation;
pub mod spans;
pub mod tracing_setup;

pub use correlation::CorrelationId;
