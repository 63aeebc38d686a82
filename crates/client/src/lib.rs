//! Console client for the match scoreboard.
//!
//! The `scoreboard` binary is the composition root: it reads [`ClientConfig`],
//! installs logging, picks a store backend and hands a
//! [`match_runtime::ScoreKeeper`] to the requested command.
//!
//! - [`commands`] runs `apply` and `show` against a store
//! - [`config`] loads settings from the environment
//! - [`logging`] installs the tracing subscriber
//! - [`scenarios`] prints the fixed demo walkthrough

pub mod commands;
pub mod config;
pub mod logging;
pub mod scenarios;

pub use config::{ClientConfig, StoreKind};
