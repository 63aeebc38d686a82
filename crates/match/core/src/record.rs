//! The persisted match record.

use std::fmt;

use crate::sequence::ResultSequence;
use crate::summary;

/// Unique identifier of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatchId(pub u64);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MatchId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A match as seen by the store: its identifier and full token history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub id: MatchId,
    pub result: ResultSequence,
}

impl Match {
    /// A match with no recorded events.
    pub fn new(id: MatchId) -> Self {
        Self {
            id,
            result: ResultSequence::new(),
        }
    }

    #[must_use]
    pub fn with_result(mut self, result: ResultSequence) -> Self {
        self.result = result;
        self
    }

    /// Display string of the current result, e.g. `"1:0 (First Half)"`.
    pub fn display_result(&self) -> String {
        summary::display(&self.result)
    }
}
