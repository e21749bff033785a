//! Command-line interface for vip.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions and mode selection
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Mode};
pub use commands::{Command, CommandDispatcher, CommandResult};
