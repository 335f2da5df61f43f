//! Hook system: registry, sequential runner, and trigger facade.

pub mod definitions;
pub mod registry;
pub mod runner;
pub mod trigger;

pub use definitions::Phase;
pub use registry::{Hook, HookRegistry, SharedHook};
pub use runner::HookRunner;
pub use trigger::HookTrigger;
