//! The task-local bindings record.
//!
//! Every context shares one task-local slot holding an immutable
//! [`Snapshot`]. Entering a scope installs a copy of the enclosing snapshot
//! extended with one binding; the enclosing snapshot comes back when the
//! scope ends. Snapshots are never mutated in place, so a captured snapshot
//! can be handed to another task without racing the task it came from.

use crate::ids::ContextId;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::task::futures::TaskLocalFuture;

pub(crate) type BoundValue = Arc<dyn Any + Send + Sync>;

tokio::task_local! {
    static BINDINGS: Snapshot;
}

/// A future running with a [`Snapshot`] installed.
pub type Scoped<F> = TaskLocalFuture<Snapshot, F>;

/// Frozen view of every binding active at the point of capture.
#[derive(Clone, Default)]
pub struct Snapshot {
    entries: Arc<HashMap<ContextId, BoundValue>>,
}

impl Snapshot {
    /// Capture the bindings of the current task.
    ///
    /// Outside any scope (or outside a runtime) the snapshot is empty.
    pub fn capture() -> Self {
        BINDINGS.try_with(Snapshot::clone).unwrap_or_default()
    }

    /// Poll `future` with this snapshot installed.
    pub fn scope<F>(self, future: F) -> Scoped<F>
    where
        F: Future,
    {
        BINDINGS.scope(self, future)
    }

    /// Run `f` with this snapshot installed.
    pub fn sync_scope<F, R>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        BINDINGS.sync_scope(self, f)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ContextId) -> bool {
        self.entries.contains_key(&id)
    }

    pub(crate) fn with_binding(&self, id: ContextId, value: BoundValue) -> Self {
        let mut entries = HashMap::clone(&self.entries);
        entries.insert(id, value);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Look up the binding for `id` in the current task.
    ///
    /// The task-local borrow is released before returning so callers may
    /// enter new scopes while holding the result.
    pub(crate) fn lookup(id: ContextId) -> Option<BoundValue> {
        BINDINGS
            .try_with(|snapshot| snapshot.entries.get(&id).cloned())
            .ok()
            .flatten()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort();
        f.debug_struct("Snapshot").field("bound", &ids).finish()
    }
}
