//! File-based repository implementations.

mod matches;

pub use matches::FileMatchRepository;
