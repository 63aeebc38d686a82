//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the scoring rules and from repositories so clients can
//! bubble them up with consistent context.
use thiserror::Error;

use match_core::TransitionError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("unknown match event {name:?}")]
    UnknownEvent { name: String },
}

impl RuntimeError {
    /// Returns true if the event was rejected by the scoring rules rather
    /// than failing in the store.
    pub fn is_rejected_event(&self) -> bool {
        matches!(self, Self::Transition(_) | Self::UnknownEvent { .. })
    }
}
