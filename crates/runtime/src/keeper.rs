//! Event processor that keeps each match's score current.
//!
//! [`ScoreKeeper`] runs one load → transition → save → render cycle per event.
//! The transition itself is the pure [`match_core::apply`]; the keeper only
//! adds the store round-trip.

use match_core::{Match, MatchEvent, MatchId, display};

use crate::api::{Result, RuntimeError};
use crate::repository::MatchRepository;

/// Applies match events against a [`MatchRepository`].
///
/// # Missing matches
///
/// A match id the store has never seen is treated as a fresh match with an
/// empty history. The record is created by the first event that succeeds;
/// a rejected event on an unseen id leaves the store untouched.
///
/// # Concurrency
///
/// No locking is done here. Callers keep at most one update in flight per
/// match id.
pub struct ScoreKeeper<R> {
    repository: R,
}

impl<R: MatchRepository> ScoreKeeper<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Applies `event` to match `id` and returns the new display string.
    ///
    /// The updated record is saved before the display string is returned. If
    /// the event is rejected, nothing is saved.
    pub async fn apply_event(&self, id: MatchId, event: MatchEvent) -> Result<String> {
        let current = self.load_or_new(id).await?;

        let next = match match_core::apply(&current.result, event) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    "Rejected {} for match[{}] at {:?}: {}",
                    event,
                    id,
                    err.sequence().to_string(),
                    err
                );
                return Err(err.into());
            }
        };

        let saved = self.repository.save(current.with_result(next)).await?;
        let shown = saved.display_result();

        tracing::info!("Applied {} to match[{}]: {} ({})", event, id, shown, saved.result);

        Ok(shown)
    }

    /// Parses `name` as a [`MatchEvent`] and applies it.
    pub async fn apply_event_named(&self, id: MatchId, name: &str) -> Result<String> {
        let event: MatchEvent = name.parse().map_err(|_| RuntimeError::UnknownEvent {
            name: name.to_string(),
        })?;
        self.apply_event(id, event).await
    }

    /// Raw token sequence of match `id`, or an empty string if it is unknown.
    pub async fn query_result(&self, id: MatchId) -> Result<String> {
        Ok(self
            .repository
            .fetch(id)
            .await?
            .map(|record| record.result.to_string())
            .unwrap_or_default())
    }

    /// Display string of match `id`. Unknown matches show as a goalless
    /// first half.
    pub async fn query_display(&self, id: MatchId) -> Result<String> {
        let record = self.load_or_new(id).await?;
        Ok(display(&record.result))
    }

    async fn load_or_new(&self, id: MatchId) -> Result<Match> {
        match self.repository.fetch(id).await? {
            Some(record) => Ok(record),
            None => {
                tracing::debug!("match[{}] not found, starting a new match", id);
                Ok(Match::new(id))
            }
        }
    }
}
