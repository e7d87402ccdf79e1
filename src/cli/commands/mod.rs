//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. `picky` with no subcommand runs
//! `check`.

pub mod check;
pub mod dispatcher;
pub mod show;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
