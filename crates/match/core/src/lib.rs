//! Deterministic scoring rules for a single match.
//!
//! `match-core` owns the token encoding that represents a match's whole
//! history as one ordered sequence, plus the pure functions built on it:
//! - [`summary`] decodes a sequence into a [`Scoreline`]
//! - [`transition`] applies a [`MatchEvent`] and produces a new sequence
//!
//! Nothing in this crate performs I/O. Persistence and orchestration live in
//! the runtime crate, which depends on the types re-exported here.
pub mod error;
pub mod event;
pub mod record;
pub mod sequence;
pub mod summary;
pub mod transition;

pub use error::{ParseSequenceError, TransitionError};
pub use event::{EventEffect, MatchEvent, Side};
pub use record::{Match, MatchId};
pub use sequence::{ResultSequence, Token};
pub use summary::{Period, Scoreline, decode, display};
pub use transition::{apply, can_cancel, cancel, last_scoring_token};
