//! # hookline-hooks
//!
//! Lifecycle-hook pipeline for Hookline. Provides:
//!
//! - Hook registry keyed by action name and phase, with set-semantics
//!   registration
//! - Sequential runner that executes a phase in registration order and
//!   stops at the first error
//! - Trigger facade running `before → work → after` around an entity
//!   action, with a validation capability for the reserved action

pub mod hooks;
pub mod prelude;
pub mod traits;

pub use hooks::definitions::Phase;
pub use hooks::registry::{Hook, HookRegistry, SharedHook};
pub use hooks::runner::HookRunner;
pub use hooks::trigger::HookTrigger;
pub use traits::{ClosureHook, Hookable, ValidationHooks, Work, hook_fn, work_fn};
