//! Entity capability traits and closure adapters.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use hookline_core::AppResult;

use crate::hooks::registry::{Hook, SharedHook};

/// An entity type whose instances can be the target of a trigger.
pub trait Hookable<D>: Send + Sync {
    /// Returns a name used in logs and error messages.
    fn entity_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Returns the validation capability of this entity type, if any.
    ///
    /// The trigger calls it for the reserved validation action instead
    /// of the registered hooks.
    fn validation(&self) -> Option<&dyn ValidationHooks<D>> {
        None
    }
}

/// Validation entry points supplied by an entity type.
#[async_trait]
pub trait ValidationHooks<D>: Send + Sync {
    /// Runs before the validation work unit.
    async fn before_validation(&self, data: &mut D) -> AppResult<()>;

    /// Runs after the validation work unit.
    async fn after_validation(&self, data: &mut D) -> AppResult<()>;
}

/// Boxed unit of work executed between the before and after phases.
pub type Work<T, D> =
    Box<dyn for<'a> FnOnce(&'a T, &'a mut D) -> BoxFuture<'a, AppResult<()>> + Send>;

/// Boxes a closure into a [`Work`].
pub fn work_fn<T, D, F>(work: F) -> Work<T, D>
where
    F: for<'a> FnOnce(&'a T, &'a mut D) -> BoxFuture<'a, AppResult<()>> + Send + 'static,
{
    Box::new(work)
}

/// Handler signature wrapped by [`ClosureHook`].
type HookClosure<T, D> =
    dyn for<'a> Fn(&'a T, &'a mut D) -> BoxFuture<'a, AppResult<()>> + Send + Sync;

/// A closure-based hook for quick registration.
pub struct ClosureHook<T, D> {
    /// Name reported in logs.
    name: String,
    /// Handler function.
    handler: Box<HookClosure<T, D>>,
}

impl<T, D> std::fmt::Debug for ClosureHook<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHook")
            .field("name", &self.name)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl<T, D> ClosureHook<T, D> {
    /// Creates a new closure-based hook.
    pub fn new<F>(name: &str, handler: F) -> Self
    where
        F: for<'a> Fn(&'a T, &'a mut D) -> BoxFuture<'a, AppResult<()>> + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            handler: Box::new(handler),
        }
    }
}

#[async_trait]
impl<T, D> Hook<T, D> for ClosureHook<T, D>
where
    T: Sync,
    D: Send,
{
    async fn call(&self, target: &T, data: &mut D) -> AppResult<()> {
        (self.handler)(target, data).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wraps a closure into a [`SharedHook`] ready for registration.
///
/// Every call allocates a new hook, so keep the returned handle to
/// unregister it later.
pub fn hook_fn<T, D, F>(name: &str, handler: F) -> SharedHook<T, D>
where
    T: Sync + 'static,
    D: Send + 'static,
    F: for<'a> Fn(&'a T, &'a mut D) -> BoxFuture<'a, AppResult<()>> + Send + Sync + 'static,
{
    Arc::new(ClosureHook::new(name, handler))
}
