//! Token encoding of a match history.
//!
//! A match is stored as a single ordered run of tokens: `H` for a home goal,
//! `A` for an away goal and `;` for a period break. The text form is the
//! concatenation of the token characters, e.g. `"HA;A"`.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSequenceError;

// ============================================================================
// Token
// ============================================================================

/// A single entry in a [`ResultSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// Home side scored (`H`).
    Home,
    /// Away side scored (`A`).
    Away,
    /// The match moved on to the next period (`;`).
    PeriodBreak,
}

impl Token {
    pub const fn as_char(self) -> char {
        match self {
            Token::Home => 'H',
            Token::Away => 'A',
            Token::PeriodBreak => ';',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'H' => Some(Token::Home),
            'A' => Some(Token::Away),
            ';' => Some(Token::PeriodBreak),
            _ => None,
        }
    }

    /// Returns true for goal tokens (`H` or `A`).
    pub const fn is_scoring(self) -> bool {
        matches!(self, Token::Home | Token::Away)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Result Sequence
// ============================================================================

/// Immutable, ordered token history of one match.
///
/// Every operation that changes the history returns a new sequence; the
/// original value is never mutated. Use [`crate::transition::apply`] to move
/// from one sequence to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResultSequence {
    tokens: Vec<Token>,
}

impl ResultSequence {
    /// Creates an empty sequence (a match that has not started scoring).
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns a new sequence with `token` appended at the tail.
    #[must_use]
    pub fn with_appended(&self, token: Token) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(token);
        Self { tokens }
    }

    /// Returns a new sequence with the token at `index` removed.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn without(&self, index: usize) -> Option<Self> {
        if index >= self.tokens.len() {
            return None;
        }
        let tokens = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, token)| *token)
            .collect();
        Some(Self { tokens })
    }
}

impl fmt::Display for ResultSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for ResultSequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Token::from_char(character).ok_or(ParseSequenceError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }
}

impl FromIterator<Token> for ResultSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResultSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResultSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
