//! Repository contract for loading and storing match records.

use async_trait::async_trait;
use match_core::{Match, MatchId};

use super::Result;

/// Store capability used by the score keeper.
///
/// Implementations only need to provide lookup by id and upsert. Neither
/// operation is expected to order concurrent writers; callers keep at most one
/// update in flight per match.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Fetch a match by id.
    ///
    /// Returns `Ok(None)` if the store has never seen this id.
    async fn fetch(&self, id: MatchId) -> Result<Option<Match>>;

    /// Insert or replace a match, returning the stored record.
    async fn save(&self, record: Match) -> Result<Match>;
}
