//! Repository layer for match records.
//!
//! Repositories hold the only mutable data in the system: each match's token
//! sequence. The score keeper depends on [`MatchRepository`] alone, so any
//! backend (in-memory map, files on disk, an external database) can be
//! plugged in at construction time.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileMatchRepository;
pub use memory::InMemoryMatchRepository;
pub use traits::MatchRepository;
