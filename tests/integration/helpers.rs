//! Shared test helpers for integration tests.

use std::sync::Arc;

use hookline_core::config::hooks::{AfterPhaseSource, HookConfig};
use hookline_hooks::prelude::*;

/// Test entity.
#[derive(Debug)]
pub struct Record {
    /// Record name.
    pub name: String,
}

impl Record {
    /// Creates a shared record.
    pub fn shared(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

/// Payload threaded through hooks and work.
#[derive(Debug, Default)]
pub struct Payload {
    /// Set by hooks that mark the payload.
    pub seen: bool,
    /// Names of the steps that ran, in order.
    pub steps: Vec<String>,
}

impl Hookable<Payload> for Record {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn validation(&self) -> Option<&dyn ValidationHooks<Payload>> {
        Some(self)
    }
}

#[async_trait]
impl ValidationHooks<Payload> for Record {
    async fn before_validation(&self, data: &mut Payload) -> AppResult<()> {
        data.steps.push("before_validation".to_string());
        Ok(())
    }

    async fn after_validation(&self, data: &mut Payload) -> AppResult<()> {
        data.steps.push("after_validation".to_string());
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// Registry shared with the trigger
    pub registry: Arc<HookRegistry<Record, Payload>>,
    /// Trigger under test
    pub trigger: HookTrigger<Record, Payload>,
}

impl TestApp {
    /// Create a test app whose after phase runs the given list
    pub fn new(after_phase: AfterPhaseSource) -> Self {
        let registry = Arc::new(HookRegistry::new());
        let config = HookConfig {
            after_phase,
            ..HookConfig::default()
        };
        let trigger = HookTrigger::new(registry.clone(), config);
        Self { registry, trigger }
    }
}

/// Hook that records its name and succeeds.
pub fn step(name: &'static str) -> SharedHook<Record, Payload> {
    hook_fn(name, move |_, data: &mut Payload| {
        Box::pin(async move {
            data.steps.push(name.to_string());
            Ok(())
        })
    })
}

/// Hook that records its name and fails with `message`.
pub fn failing_step(name: &'static str, message: &'static str) -> SharedHook<Record, Payload> {
    hook_fn(name, move |_, data: &mut Payload| {
        Box::pin(async move {
            data.steps.push(name.to_string());
            Err(AppError::hook(message))
        })
    })
}

/// Work unit that does nothing.
pub fn noop_work() -> Work<Record, Payload> {
    work_fn(|_, _| Box::pin(async { Ok(()) }))
}
