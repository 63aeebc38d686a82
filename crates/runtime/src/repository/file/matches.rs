//! File-based MatchRepository implementation.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use match_core::{Match, MatchId};
use tokio::fs;

use crate::repository::{MatchRepository, RepositoryError, Result};

/// File-based implementation of MatchRepository.
///
/// Stores each match as its own JSON document, `match_{id}.json`, under a base
/// directory. A document is small (`{"id":91,"result":"HA;A"}`), so writes go
/// to a temp file and are renamed into place.
pub struct FileMatchRepository {
    base_dir: PathBuf,
}

impl FileMatchRepository {
    /// Create a new file-based repository, creating `base_dir` if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    /// Check if a match document exists.
    pub async fn exists(&self, id: MatchId) -> Result<bool> {
        Ok(fs::try_exists(self.match_path(id)).await?)
    }

    /// List the ids of all stored matches in ascending order.
    pub async fn list_ids(&self) -> Result<Vec<MatchId>> {
        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id_str) = filename
                    .strip_prefix("match_")
                    .and_then(|s| s.strip_suffix(".json"))
                && let Ok(id) = id_str.parse::<u64>()
            {
                ids.push(MatchId(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }

    fn match_path(&self, id: MatchId) -> PathBuf {
        self.base_dir.join(format!("match_{}.json", id))
    }
}

#[async_trait]
impl MatchRepository for FileMatchRepository {
    async fn fetch(&self, id: MatchId) -> Result<Option<Match>> {
        let path = self.match_path(id);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepositoryError::Io(e)),
        };

        let record: Match = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded match[{}] from {}", id, path.display());

        Ok(Some(record))
    }

    async fn save(&self, record: Match) -> Result<Match> {
        let path = self.match_path(record.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec(&record)?;

        fs::write(&temp_path, bytes).await?;
        fs::rename(&temp_path, &path).await?;

        tracing::debug!("Saved match[{}] to {}", record.id, path.display());

        Ok(record)
    }
}
