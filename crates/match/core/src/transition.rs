//! Pure state transitions over a [`ResultSequence`].
//!
//! The sequence itself is the state; there is no separate state enum. Goal and
//! period events append a token. Cancel events remove the most recent goal of
//! their side, subject to the legality check in [`can_cancel`].
//!
//! Period breaks are never removed by a cancellation: once the match has moved
//! past a period, that boundary is fixed, and the cancelled goal is taken out
//! of whichever period it was scored in.

use crate::error::TransitionError;
use crate::event::{EventEffect, MatchEvent, Side};
use crate::sequence::{ResultSequence, Token};

/// Applies `event` to `sequence` and returns the resulting sequence.
///
/// `sequence` is never modified. On failure the error carries a copy of it.
pub fn apply(
    sequence: &ResultSequence,
    event: MatchEvent,
) -> Result<ResultSequence, TransitionError> {
    match event.effect() {
        EventEffect::Append(token) => Ok(sequence.with_appended(token)),
        EventEffect::Cancel(side) => cancel(sequence, side),
    }
}

/// Index and value of the last scoring token, skipping trailing period breaks.
///
/// Returns `None` for an empty sequence or one made only of period breaks.
pub fn last_scoring_token(sequence: &ResultSequence) -> Option<(usize, Token)> {
    sequence
        .tokens()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, token)| token.is_scoring())
        .map(|(index, token)| (index, *token))
}

/// Returns true if the most recent goal belongs to `side`.
pub fn can_cancel(sequence: &ResultSequence, side: Side) -> bool {
    matches!(last_scoring_token(sequence), Some((_, token)) if token == side.goal_token())
}

/// Removes the most recent goal of `side`.
///
/// If the sequence ends in a goal, that goal is dropped. If it ends in one or
/// more period breaks, the breaks stay and the nearest goal before them is
/// removed instead.
pub fn cancel(sequence: &ResultSequence, side: Side) -> Result<ResultSequence, TransitionError> {
    let illegal = || TransitionError::IllegalCancel {
        event: side.cancel_event(),
        sequence: sequence.clone(),
    };

    if !can_cancel(sequence, side) {
        return Err(illegal());
    }

    // Skipping only trailing breaks means the last scoring token is also the
    // nearest goal of `side` before them once the check passes.
    last_scoring_token(sequence)
        .and_then(|(index, _)| sequence.without(index))
        .ok_or_else(illegal)
}
