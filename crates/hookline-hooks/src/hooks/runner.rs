//! Sequential hook runner: executes one phase of an action.
//!
//! - Hooks run one at a time in registration order; each must finish
//!   before the next starts.
//! - The first error stops the chain and is returned unchanged.
//! - A phase with no registered list succeeds immediately.
//!
//! The runner walks the live list rather than a snapshot, so hooks
//! registered or unregistered mid-run may or may not be seen. A cursor
//! that lands past the end of the list is reported as a corrupt entry.
//! No timeout is applied: a hook that never completes stalls the phase.

use std::sync::Arc;

use tracing::{debug, error, warn};

use hookline_core::{AppError, AppResult};

use super::definitions::Phase;
use super::registry::{HookRegistry, Slot};

/// Runs registered hooks for a single action and phase.
pub struct HookRunner<T, D> {
    /// Hook registry.
    registry: Arc<HookRegistry<T, D>>,
}

impl<T, D> std::fmt::Debug for HookRunner<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRunner")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<T, D> HookRunner<T, D> {
    /// Creates a new hook runner.
    pub fn new(registry: Arc<HookRegistry<T, D>>) -> Self {
        Self { registry }
    }

    /// Runs every hook registered for `(action, phase)` against `target`.
    pub async fn run(&self, target: &T, action: &str, phase: Phase, data: &mut D) -> AppResult<()> {
        let mut index = 0;

        loop {
            match self.registry.slot(action, phase, index).await {
                Slot::Hook(hook) => {
                    debug!(
                        action = %action,
                        phase = %phase,
                        index = index,
                        hook = %hook.name(),
                        "Dispatching hook"
                    );

                    if let Err(e) = hook.call(target, data).await {
                        warn!(
                            action = %action,
                            phase = %phase,
                            index = index,
                            hook = %hook.name(),
                            error = %e,
                            "Hook aborted chain"
                        );
                        return Err(e);
                    }

                    index += 1;
                }
                Slot::End => {
                    debug!(action = %action, phase = %phase, ran = index, "Hook chain completed");
                    return Ok(());
                }
                Slot::Missing if index == 0 => {
                    debug!(action = %action, phase = %phase, "No hooks registered");
                    return Ok(());
                }
                Slot::Missing => {
                    error!(action = %action, phase = %phase, index = index, "Hook list vanished mid-run");
                    return Err(AppError::corrupt_hook(format!(
                        "Hook list for '{action}' ({phase}) disappeared at index {index}"
                    )));
                }
                Slot::Vacant { len } => {
                    error!(
                        action = %action,
                        phase = %phase,
                        index = index,
                        len = len,
                        "No callable hook at cursor"
                    );
                    return Err(AppError::corrupt_hook(format!(
                        "No callable hook at index {index} of '{action}' ({phase}), list length {len}"
                    )));
                }
            }
        }
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry<T, D>> {
        &self.registry
    }
}
