//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the selected [`Mode`]

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::debug;

use crate::cli::args::{Cli, Mode};
use crate::error::Result;
use crate::ui::UserInterface;

use super::exec::ExecCommand;
use super::init::InitCommand;
use super::locate::LocateCommand;

/// Exit code for conflicting modes, matching clap's usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI mode implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Create a result from a child's exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI modes to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the mode selected on the command line.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mode = cli.mode();
        debug!("Dispatching {:?}", mode);

        match mode {
            Mode::Init(directory) => {
                let cmd = InitCommand::new(&self.project_root, &directory, cli.overrides());
                cmd.execute(ui)
            }
            Mode::Locate(directory) => {
                let cmd = LocateCommand::new(&self.project_root, &directory);
                cmd.execute(ui)
            }
            Mode::Exec(invocation) => {
                let cmd = ExecCommand::new(&self.project_root, invocation);
                cmd.execute(ui)
            }
            Mode::Help => {
                Cli::command().print_help()?;
                Ok(CommandResult::success())
            }
            Mode::Ambiguous => {
                Cli::command().print_help()?;
                Ok(CommandResult::failure(USAGE_EXIT_CODE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_child_code() {
        assert!(CommandResult::from_exit_code(0).success);
        let result = CommandResult::from_exit_code(123);
        assert!(!result.success);
        assert_eq!(result.exit_code, 123);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn ambiguous_modes_exit_with_usage_code() {
        let cli = Cli::try_parse_from(["vip", "--init", "--locate"]).unwrap();
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert_eq!(result.exit_code, USAGE_EXIT_CODE);
    }

    #[test]
    fn no_mode_succeeds_with_help() {
        let cli = Cli::try_parse_from(["vip"]).unwrap();
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
    }
}
