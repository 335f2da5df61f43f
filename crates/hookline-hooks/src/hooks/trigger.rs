//! Trigger facade: wraps a unit of work in the before and after phases.
//!
//! A trigger moves through `before → work → after` and stops at the first
//! error. For the reserved validation action both phases are delegated to
//! the entity's [`ValidationHooks`] instead of the registry.

use std::sync::Arc;

use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use hookline_core::config::hooks::{AfterPhaseSource, HookConfig};
use hookline_core::{AppError, AppResult};

use super::definitions::Phase;
use super::registry::HookRegistry;
use super::runner::HookRunner;
use crate::traits::{Hookable, ValidationHooks, Work};

/// Runs lifecycle actions on entities of type `T` with payload `D`.
pub struct HookTrigger<T, D> {
    /// Runner shared by both phases.
    runner: HookRunner<T, D>,
    /// Pipeline settings.
    config: HookConfig,
}

impl<T, D> std::fmt::Debug for HookTrigger<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookTrigger")
            .field("runner", &self.runner)
            .field("config", &self.config)
            .finish()
    }
}

impl<T, D> HookTrigger<T, D>
where
    T: Hookable<D>,
{
    /// Creates a trigger over the given registry.
    pub fn new(registry: Arc<HookRegistry<T, D>>, config: HookConfig) -> Self {
        Self {
            runner: HookRunner::new(registry),
            config,
        }
    }

    /// Performs `action` on `target`.
    ///
    /// Without `work` the before phase is skipped. On success the target
    /// is handed back; otherwise the first error raised by a hook, the
    /// work or the validation capability is returned as-is.
    pub async fn trigger(
        &self,
        target: Arc<T>,
        action: &str,
        work: Option<Work<T, D>>,
        data: &mut D,
    ) -> AppResult<Arc<T>> {
        let span = info_span!(
            "trigger",
            trigger_id = %Uuid::now_v7(),
            action = %action,
            entity = %target.entity_name(),
        );

        self.execute(target, action, work, data)
            .instrument(span)
            .await
    }

    async fn execute(
        &self,
        target: Arc<T>,
        action: &str,
        work: Option<Work<T, D>>,
        data: &mut D,
    ) -> AppResult<Arc<T>> {
        let entity: &T = &target;
        let validating = self.is_validation(action);

        match work {
            Some(work) => {
                if validating {
                    self.validation_of(entity, action)?
                        .before_validation(data)
                        .await?;
                } else {
                    self.runner.run(entity, action, Phase::Before, data).await?;
                }

                work(entity, &mut *data).await.map_err(|e| {
                    warn!(error = %e, "Work unit failed");
                    e
                })?;
            }
            None => debug!("No work supplied, skipping before phase"),
        }

        if validating {
            self.validation_of(entity, action)?
                .after_validation(data)
                .await?;
        } else {
            self.runner
                .run(entity, action, self.after_phase(), data)
                .await?;
        }

        info!("Trigger completed");
        Ok(target)
    }

    /// Returns whether `action` is the reserved validation action.
    pub fn is_validation(&self, action: &str) -> bool {
        action == self.config.validation_action
    }

    /// Returns the phase list run after the work unit.
    fn after_phase(&self) -> Phase {
        match self.config.after_phase {
            AfterPhaseSource::After => Phase::After,
            AfterPhaseSource::MirrorBefore => Phase::Before,
        }
    }

    fn validation_of<'a>(
        &self,
        entity: &'a T,
        action: &str,
    ) -> AppResult<&'a dyn ValidationHooks<D>> {
        entity.validation().ok_or_else(|| {
            warn!("Entity has no validation capability");
            AppError::not_implemented(format!(
                "Entity '{}' does not support the '{action}' action",
                entity.entity_name()
            ))
        })
    }

    /// Returns the pipeline settings.
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Returns a reference to the hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry<T, D>> {
        self.runner.registry()
    }
}
