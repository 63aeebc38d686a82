//! Runtime orchestration for match scoring.
//!
//! This crate wires the pure rules from `match-core` to a store. Consumers
//! construct a [`ScoreKeeper`] with a [`MatchRepository`] backend and feed it
//! events one at a time.
//!
//! Modules are organized by responsibility:
//! - [`keeper`] hosts the event processor
//! - [`api`] exposes the error types downstream clients interact with
//! - [`repository`] provides the store contract and its backends
pub mod api;
pub mod keeper;
pub mod repository;

pub use api::{Result, RuntimeError};
pub use keeper::ScoreKeeper;
pub use repository::{
    FileMatchRepository, InMemoryMatchRepository, MatchRepository, RepositoryError,
};
