//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the single
//! mode selected on the command line (`--init`, `--locate` or a command to
//! run) to its implementation.

pub mod dispatcher;
pub mod exec;
pub mod init;
pub mod locate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, USAGE_EXIT_CODE};
