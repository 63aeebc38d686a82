//! Decoding a token sequence into the score and period shown to viewers.

use std::fmt;

use crate::sequence::{ResultSequence, Token};

/// Phase of a match, derived from how many period breaks have been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Period {
    FirstHalf,
    SecondHalf,
    /// Extra-time period, numbered from 1. There is no upper bound.
    ExtraTime(u64),
}

impl Period {
    /// Maps a 1-based period count to its period.
    ///
    /// A count of zero is treated as the first half.
    pub const fn from_count(count: u64) -> Self {
        match count {
            0 | 1 => Period::FirstHalf,
            2 => Period::SecondHalf,
            n => Period::ExtraTime(n - 2),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::FirstHalf => f.write_str("First Half"),
            Period::SecondHalf => f.write_str("Second Half"),
            Period::ExtraTime(n) => write!(f, "Extra Time {n}"),
        }
    }
}

/// Score and period summary of a match.
///
/// Always derived from a sequence; never stored. Renders as
/// `"{home}:{away} ({period})"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreline {
    pub home: u64,
    pub away: u64,
    pub period: Period,
}

impl fmt::Display for Scoreline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.home, self.away, self.period)
    }
}

/// Replays `sequence` from the start and returns its summary.
pub fn decode(sequence: &ResultSequence) -> Scoreline {
    let (mut home, mut away, mut periods) = (0u64, 0u64, 1u64);

    for token in sequence.tokens() {
        match token {
            Token::Home => home = home.saturating_add(1),
            Token::Away => away = away.saturating_add(1),
            Token::PeriodBreak => periods = periods.saturating_add(1),
        }
    }

    Scoreline {
        home,
        away,
        period: Period::from_count(periods),
    }
}

/// Display string for `sequence`, e.g. `"1:2 (Second Half)"`.
pub fn display(sequence: &ResultSequence) -> String {
    decode(sequence).to_string()
}
