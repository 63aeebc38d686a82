//! Error types for sequence parsing and event transitions.
//!
//! Both errors are plain values: they carry enough context for the caller to
//! report the failure without re-reading any state.

use thiserror::Error;

use crate::event::MatchEvent;
use crate::sequence::ResultSequence;

/// Raised when a text sequence contains a character outside `H`, `A`, `;`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid token {character:?} at position {position}")]
pub struct ParseSequenceError {
    pub character: char,
    pub position: usize,
}

/// Raised when an event cannot be applied to the current sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The most recent scoring token (ignoring trailing period breaks) does not
    /// belong to the side being cancelled, or there is no scoring token at all.
    #[error("cannot cancel goal: the last goal type differs from the cancel goal type")]
    IllegalCancel {
        event: MatchEvent,
        /// Sequence at the time of failure. It is left untouched.
        sequence: ResultSequence,
    },
}

impl TransitionError {
    /// The event that was rejected.
    pub fn event(&self) -> MatchEvent {
        match self {
            Self::IllegalCancel { event, .. } => *event,
        }
    }

    /// The sequence the event was applied to.
    pub fn sequence(&self) -> &ResultSequence {
        match self {
            Self::IllegalCancel { sequence, .. } => sequence,
        }
    }
}
