//! Carrying bindings into newly spawned tasks.
//!
//! `tokio::spawn` starts a fresh task with no task-locals. The helpers here
//! capture a [`Snapshot`] at the spawn site and install it in the child, so
//! work handed off from inside a scope still sees the scope's values. The
//! child gets a frozen copy: scopes entered afterwards in either task are not
//! visible to the other.

use crate::snapshot::{Scoped, Snapshot};
use std::future::Future;
use tokio::task::JoinHandle;

/// Attach the caller's bindings to a future.
pub trait PropagateExt: Future + Sized {
    /// Equivalent to `Snapshot::capture().scope(self)`.
    fn in_current_context(self) -> Scoped<Self> {
        Snapshot::capture().scope(self)
    }

    fn in_snapshot(self, snapshot: Snapshot) -> Scoped<Self> {
        snapshot.scope(self)
    }
}

impl<F: Future> PropagateExt for F {}

/// [`tokio::spawn`] carrying the caller's bindings.
#[track_caller]
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(future.in_current_context())
}

/// [`tokio::task::spawn_local`] carrying the caller's bindings.
///
/// Must be called from within a `LocalSet`.
#[track_caller]
pub fn spawn_local<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + 'static,
    F::Output: 'static,
{
    tokio::task::spawn_local(future.in_current_context())
}

/// [`tokio::task::spawn_blocking`] carrying the caller's bindings.
#[track_caller]
pub fn spawn_blocking<F, R>(f: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let snapshot = Snapshot::capture();
    tokio::task::spawn_blocking(move || snapshot.sync_scope(f))
}
