//! In-memory repository implementations for testing and development.

mod matches;

pub use matches::InMemoryMatchRepository;
