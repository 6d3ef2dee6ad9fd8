//! Correlation ID propagation for request flows.
//!
//! The current correlation ID rides on a [`Context`], so spans created
//! anywhere inside a request can tag themselves with it.

use contexta_core::Context;
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Correlation identifier for tying log lines to one unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CorrelationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CorrelationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The correlation ID of the request being served, if any.
pub static CORRELATION: LazyLock<Context<Option<CorrelationId>>> =
    LazyLock::new(|| Context::named("correlation-id", None));

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

impl CorrelationId {
    /// A fresh `corr-{millis}-{sequence}` identifier.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64);
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("corr-{millis}-{sequence}"))
    }

    /// The ID bound by the enclosing request, if any.
    pub fn current() -> Option<Self> {
        CORRELATION.get()
    }
}
