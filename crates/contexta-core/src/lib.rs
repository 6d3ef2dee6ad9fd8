//! Typed, task-scoped context propagation.
//!
//! A [`Context`] carries a value for the dynamic extent of a closure or
//! future. Code running inside that extent reads it back with
//! [`Context::get`] without the value being passed through every call, and
//! concurrently running scopes never observe each other's values.

pub mod context;
pub mod ids;
pub mod snapshot;
pub mod spawn;

pub use context::{Context, create_context, use_context};
pub use ids::ContextId;
pub use snapshot::{Scoped, Snapshot};
pub use spawn::{PropagateExt, spawn, spawn_blocking, spawn_local};
