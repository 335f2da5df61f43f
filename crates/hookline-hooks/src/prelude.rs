//! Prelude for convenient imports.

pub use async_trait::async_trait;
pub use futures::future::BoxFuture;

pub use hookline_core::{AppError, AppResult, ErrorKind};

pub use crate::hooks::definitions::Phase;
pub use crate::hooks::registry::{Hook, HookRegistry, SharedHook};
pub use crate::hooks::trigger::HookTrigger;
pub use crate::traits::{Hookable, ValidationHooks, Work, hook_fn, work_fn};
