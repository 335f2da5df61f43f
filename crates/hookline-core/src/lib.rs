//! # hookline-core
//!
//! Core crate for Hookline. Contains the unified error system and the
//! configuration schemas shared by the hook pipeline and the binary.
//!
//! This crate has **no** internal dependencies on other Hookline crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
