//! In-memory match repository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use match_core::{Match, MatchId};

use crate::repository::{MatchRepository, RepositoryError, Result};

/// In-memory match repository for testing and development.
///
/// Thread-safe but not persistent across process restarts.
pub struct InMemoryMatchRepository {
    matches: RwLock<HashMap<MatchId, Match>>,
}

impl InMemoryMatchRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            matches: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository pre-loaded with `records`.
    pub fn with_matches(records: impl IntoIterator<Item = Match>) -> Self {
        let matches = records.into_iter().map(|record| (record.id, record)).collect();
        Self {
            matches: RwLock::new(matches),
        }
    }

    /// Number of stored matches.
    pub fn len(&self) -> Result<usize> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(matches.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn fetch(&self, id: MatchId) -> Result<Option<Match>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(matches.get(&id).cloned())
    }

    async fn save(&self, record: Match) -> Result<Match> {
        let mut matches = self
            .matches
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        matches.insert(record.id, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_unknown_id_returns_none() {
        let repo = InMemoryMatchRepository::new();
        assert!(repo.fetch(MatchId(1)).await.unwrap().is_none());
        assert!(repo.is_empty().unwrap());
    }

    #[tokio::test]
    async fn save_upserts_by_id() {
        let repo = InMemoryMatchRepository::new();

        repo.save(Match::new(MatchId(3))).await.unwrap();
        let updated = Match::new(MatchId(3)).with_result("H;".parse().unwrap());
        let saved = repo.save(updated.clone()).await.unwrap();

        assert_eq!(saved, updated);
        assert_eq!(repo.fetch(MatchId(3)).await.unwrap(), Some(updated));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn preloaded_matches_are_visible() {
        let record = Match::new(MatchId(9)).with_result("HA".parse().unwrap());
        let repo = InMemoryMatchRepository::with_matches([record.clone()]);

        assert_eq!(repo.fetch(MatchId(9)).await.unwrap(), Some(record));
    }
}
