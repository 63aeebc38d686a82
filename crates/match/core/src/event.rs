//! Match events and the side they refer to.

use crate::sequence::Token;

/// Side of the pitch a goal or cancellation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Goal token recorded for this side.
    pub const fn goal_token(self) -> Token {
        match self {
            Side::Home => Token::Home,
            Side::Away => Token::Away,
        }
    }

    /// Event that cancels this side's most recent goal.
    pub const fn cancel_event(self) -> MatchEvent {
        match self {
            Side::Home => MatchEvent::HomeCancel,
            Side::Away => MatchEvent::AwayCancel,
        }
    }
}

/// What an event does to a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventEffect {
    /// Append a token at the tail.
    Append(Token),
    /// Remove the most recent goal of a side.
    Cancel(Side),
}

/// A single event reported for a match.
///
/// Events are stateless; their effect depends only on the current sequence.
/// Names parse case-insensitively in snake_case (`home_goal`, `away_cancel`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MatchEvent {
    HomeGoal,
    AwayGoal,
    NextPeriod,
    HomeCancel,
    AwayCancel,
}

impl MatchEvent {
    pub const ALL: [MatchEvent; 5] = [
        MatchEvent::HomeGoal,
        MatchEvent::AwayGoal,
        MatchEvent::NextPeriod,
        MatchEvent::HomeCancel,
        MatchEvent::AwayCancel,
    ];

    pub const fn effect(self) -> EventEffect {
        match self {
            MatchEvent::HomeGoal => EventEffect::Append(Token::Home),
            MatchEvent::AwayGoal => EventEffect::Append(Token::Away),
            MatchEvent::NextPeriod => EventEffect::Append(Token::PeriodBreak),
            MatchEvent::HomeCancel => EventEffect::Cancel(Side::Home),
            MatchEvent::AwayCancel => EventEffect::Cancel(Side::Away),
        }
    }
}
