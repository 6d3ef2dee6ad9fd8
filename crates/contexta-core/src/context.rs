//! The scoped value container.

use crate::ids::ContextId;
use crate::snapshot::Snapshot;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::trace;

/// A typed value provided for the dynamic extent of a closure or future.
///
/// Reads made inside a scope see the value bound by the innermost enclosing
/// scope for this context; reads made anywhere else see the default. Each
/// `Context` is independent of every other, even when both carry the same
/// type.
///
/// ```
/// use contexta_core::Context;
///
/// let request_id = Context::new(String::from("unknown-request"));
///
/// request_id.run("req-123".to_string(), || {
///     assert_eq!(request_id.get(), "req-123");
/// });
/// assert_eq!(request_id.get(), "unknown-request");
/// ```
pub struct Context<T> {
    id: ContextId,
    name: Option<&'static str>,
    default: T,
}

impl<T> Context<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(default: T) -> Self {
        Self {
            id: ContextId::next(),
            name: None,
            default,
        }
    }

    /// Like [`Context::new`], with a name that shows up in `Debug` output and
    /// trace events.
    pub fn named(name: &'static str, default: T) -> Self {
        Self {
            id: ContextId::next(),
            name: Some(name),
            default,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Run `body` with `value` bound.
    ///
    /// Whatever `body` returns, `Err` included, is returned unchanged. The
    /// previous binding is restored on return and on unwind.
    pub fn run<R>(&self, value: T, body: impl FnOnce() -> R) -> R {
        let snapshot = self.bind(value);
        trace!(context = %self.id, name = self.label(), "entering scope");
        let output = snapshot.sync_scope(body);
        trace!(context = %self.id, name = self.label(), "left scope");
        output
    }

    /// Poll `body` with `value` bound.
    ///
    /// The binding follows the future across every suspension point and is
    /// installed only while the future is being polled, so concurrently
    /// polled scopes stay isolated. The enclosing bindings are taken at first
    /// poll, so a scope built in one place and awaited inside another scope
    /// still sees that scope's bindings.
    pub fn scope<F>(&self, value: T, body: F) -> impl Future<Output = F::Output> + use<T, F>
    where
        F: Future,
    {
        let id = self.id;
        let name = self.label();
        async move {
            let snapshot = Snapshot::capture().with_binding(id, Arc::new(value));
            trace!(context = %id, name = name, "entering scope");
            let output = snapshot.scope(body).await;
            trace!(context = %id, name = name, "left scope");
            output
        }
    }

    /// Call `body` with `value` bound and poll the future it returns under
    /// the same binding.
    ///
    /// Unlike [`Context::scope`], code that runs before the closure hands
    /// back its future also observes `value`. The closure is called at first
    /// poll.
    pub fn run_async<F, Fut>(
        &self,
        value: T,
        body: F,
    ) -> impl Future<Output = Fut::Output> + use<T, F, Fut>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let id = self.id;
        let name = self.label();
        async move {
            let snapshot = Snapshot::capture().with_binding(id, Arc::new(value));
            trace!(context = %id, name = name, "entering scope");
            let future = snapshot.clone().sync_scope(body);
            let output = snapshot.scope(future).await;
            trace!(context = %id, name = name, "left scope");
            output
        }
    }

    /// The value bound in the innermost enclosing scope, or the default.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Borrow the current value instead of cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.bound() {
            Some(value) => f(&*value),
            None => f(&self.default),
        }
    }

    /// The bound value, without falling back to the default.
    ///
    /// A bound value equal to the default (or a bound `None`) still counts as
    /// bound.
    pub fn try_get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.bound().map(|value| T::clone(&value))
    }

    pub fn is_bound(&self) -> bool {
        Snapshot::lookup(self.id).is_some()
    }

    fn bind(&self, value: T) -> Snapshot {
        Snapshot::capture().with_binding(self.id, Arc::new(value))
    }

    fn bound(&self) -> Option<Arc<T>> {
        Snapshot::lookup(self.id)?.downcast::<T>().ok()
    }

    fn label(&self) -> &'static str {
        self.name.unwrap_or("anonymous")
    }
}

impl<T> Default for Context<T>
where
    T: Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("default", &self.default)
            .finish()
    }
}

/// Create a context holding `default`.
pub fn create_context<T>(default: T) -> Context<T>
where
    T: Send + Sync + 'static,
{
    Context::new(default)
}

/// Read the current value of `context`.
pub fn use_context<T>(context: &Context<T>) -> T
where
    T: Clone + Send + Sync + 'static,
{
    context.get()
}
