//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the keeper and repositories can stay focused on their own concerns.

pub mod errors;

pub use errors::{Result, RuntimeError};
