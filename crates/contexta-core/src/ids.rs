//! Identifiers for context instances.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static CONTEXT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a [`Context`](crate::Context).
///
/// Bindings are keyed by this id, which keeps two contexts holding the same
/// value type from seeing each other's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(u64);

impl ContextId {
    pub(crate) fn next() -> Self {
        Self(CONTEXT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}
