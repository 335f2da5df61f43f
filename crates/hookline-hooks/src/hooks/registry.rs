//! Hook registry: observers register callbacks per action and phase.
//!
//! Each `(action, phase)` pair owns an ordered list with set semantics:
//! a callback appears at most once and lists keep registration order.
//! Callback identity is the `Arc` allocation, so registering a clone of
//! an already-registered [`SharedHook`] is a duplicate.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use hookline_core::AppResult;

use super::definitions::Phase;

/// A callback run during one phase of an action.
///
/// Returning `Ok(())` lets the chain continue with the next hook;
/// returning an error aborts the remaining hooks and the trigger.
#[async_trait]
pub trait Hook<T, D>: Send + Sync {
    /// Handles one invocation for `target` with the shared payload.
    async fn call(&self, target: &T, data: &mut D) -> AppResult<()>;

    /// Returns a name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Reference-counted hook, the unit stored in the registry.
pub type SharedHook<T, D> = Arc<dyn Hook<T, D>>;

/// Phase → ordered hooks for a single action.
type PhaseHooks<T, D> = HashMap<Phase, Vec<SharedHook<T, D>>>;

/// What the runner finds at a cursor position in a live list.
pub(crate) enum Slot<T, D> {
    /// A callable hook.
    Hook(SharedHook<T, D>),
    /// The cursor sits exactly at the end of the list.
    End,
    /// No list exists for the action and phase.
    Missing,
    /// The cursor is past the end of the list.
    Vacant {
        /// Current list length.
        len: usize,
    },
}

/// Returns whether two shared hooks point at the same allocation.
fn same_hook<T, D>(a: &SharedHook<T, D>, b: &SharedHook<T, D>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// Registry of hooks organized by action name and phase.
pub struct HookRegistry<T, D> {
    /// Action name → phase → hooks in registration order.
    hooks: RwLock<HashMap<String, PhaseHooks<T, D>>>,
}

impl<T, D> std::fmt::Debug for HookRegistry<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry").finish_non_exhaustive()
    }
}

impl<T, D> HookRegistry<T, D> {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a hook for an action and phase.
    ///
    /// Returns `false` without changing anything when the same hook is
    /// already registered for that pair.
    pub async fn register(&self, action: &str, phase: Phase, hook: SharedHook<T, D>) -> bool {
        let mut hooks = self.hooks.write().await;
        let entries = hooks
            .entry(action.to_string())
            .or_default()
            .entry(phase)
            .or_default();

        if entries.iter().any(|existing| same_hook(existing, &hook)) {
            debug!(
                action = %action,
                phase = %phase,
                hook = %hook.name(),
                "Hook already registered"
            );
            return false;
        }

        let name = hook.name().to_string();
        entries.push(hook);

        info!(
            action = %action,
            phase = %phase,
            hook = %name,
            position = entries.len() - 1,
            "Hook registered"
        );
        true
    }

    /// Removes a single registration of `hook` for an action and phase.
    ///
    /// Returns `false` when the action, the phase or the hook is unknown.
    pub async fn unregister(&self, action: &str, phase: Phase, hook: &SharedHook<T, D>) -> bool {
        let mut hooks = self.hooks.write().await;

        let Some(entries) = hooks
            .get_mut(action)
            .and_then(|phases| phases.get_mut(&phase))
        else {
            debug!(action = %action, phase = %phase, "No hooks to unregister");
            return false;
        };

        let Some(position) = entries.iter().position(|existing| same_hook(existing, hook)) else {
            debug!(
                action = %action,
                phase = %phase,
                hook = %hook.name(),
                "Hook not registered"
            );
            return false;
        };

        entries.remove(position);

        info!(
            action = %action,
            phase = %phase,
            hook = %hook.name(),
            position = position,
            "Hook unregistered"
        );
        true
    }

    /// Registers a hook for the before phase of an action.
    pub async fn register_before(&self, action: &str, hook: SharedHook<T, D>) -> bool {
        self.register(action, Phase::Before, hook).await
    }

    /// Registers a hook for the after phase of an action.
    pub async fn register_after(&self, action: &str, hook: SharedHook<T, D>) -> bool {
        self.register(action, Phase::After, hook).await
    }

    /// Unregisters a hook from the before phase of an action.
    pub async fn unregister_before(&self, action: &str, hook: &SharedHook<T, D>) -> bool {
        self.unregister(action, Phase::Before, hook).await
    }

    /// Unregisters a hook from the after phase of an action.
    pub async fn unregister_after(&self, action: &str, hook: &SharedHook<T, D>) -> bool {
        self.unregister(action, Phase::After, hook).await
    }

    /// Returns whether any hooks are registered for an action and phase.
    pub async fn has_hooks(&self, action: &str, phase: Phase) -> bool {
        self.hook_count(action, phase).await > 0
    }

    /// Returns the number of hooks registered for an action and phase.
    pub async fn hook_count(&self, action: &str, phase: Phase) -> usize {
        let hooks = self.hooks.read().await;
        hooks
            .get(action)
            .and_then(|phases| phases.get(&phase))
            .map(|entries| entries.len())
            .unwrap_or(0)
    }

    /// Returns the names of the hooks for an action and phase, in order.
    pub async fn hook_names(&self, action: &str, phase: Phase) -> Vec<String> {
        let hooks = self.hooks.read().await;
        hooks
            .get(action)
            .and_then(|phases| phases.get(&phase))
            .map(|entries| entries.iter().map(|e| e.name().to_string()).collect())
            .unwrap_or_default()
    }

    /// Returns every action with at least one hook, sorted by name.
    pub async fn registered_actions(&self) -> Vec<String> {
        let hooks = self.hooks.read().await;
        let mut actions: Vec<String> = hooks
            .iter()
            .filter(|(_, phases)| phases.values().any(|entries| !entries.is_empty()))
            .map(|(action, _)| action.clone())
            .collect();
        actions.sort();
        actions
    }

    /// Looks up the entry at `index` in the live list.
    ///
    /// The lock is released before returning so the caller may await the
    /// hook while others register or unregister.
    pub(crate) async fn slot(&self, action: &str, phase: Phase, index: usize) -> Slot<T, D> {
        let hooks = self.hooks.read().await;

        let Some(entries) = hooks.get(action).and_then(|phases| phases.get(&phase)) else {
            return Slot::Missing;
        };

        match entries.get(index) {
            Some(hook) => Slot::Hook(hook.clone()),
            None if index == entries.len() => Slot::End,
            None => Slot::Vacant { len: entries.len() },
        }
    }
}

impl<T, D> Default for HookRegistry<T, D> {
    fn default() -> Self {
        Self::new()
    }
}
