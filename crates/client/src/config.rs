//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Store backend selected for `apply` and `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreKind {
    /// Matches live only for the duration of the process.
    Memory,
    /// One JSON document per match under [`ClientConfig::data_dir`].
    #[default]
    File,
}

/// Configuration required to bootstrap the scoreboard client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub store: StoreKind,
    pub data_dir: PathBuf,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            data_dir: default_data_dir(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_STORE` - `file` or `memory` (default: file)
    /// - `SCOREBOARD_DATA_DIR` - Directory for the file store (default: platform-specific)
    /// - `SCOREBOARD_LOG_DIR` - Also write logs to `scoreboard.log` here (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("SCOREBOARD_STORE") {
            match raw.parse::<StoreKind>() {
                Ok(store) => config.store = store,
                Err(_) => tracing::warn!(
                    "Ignoring unknown SCOREBOARD_STORE={:?}, using {}",
                    raw,
                    config.store
                ),
            }
        }

        if let Some(dir) = lookup("SCOREBOARD_DATA_DIR").filter(|s| !s.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        config.log_dir = lookup("SCOREBOARD_LOG_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        config
    }
}

/// Platform data directory for match files, falling back to the working directory.
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "scoreboard")
        .map(|dirs| dirs.data_dir().join("matches"))
        .unwrap_or_else(|| PathBuf::from("./scoreboard-data"))
}
