//! Command execution mode.
//!
//! `vip command [args...]` runs `command` from the virtualenv governing the
//! current directory and exits with the child's exit code.

use std::path::{Path, PathBuf};

use crate::environment::resolve;
use crate::error::Result;
use crate::shell::{execute, platform_resolver, CommandInvocation, Interrupt};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Runs an executable from the environment's bin directory.
pub struct ExecCommand {
    project_root: PathBuf,
    invocation: CommandInvocation,
}

impl ExecCommand {
    /// Create a new exec command resolving from `project_root`.
    pub fn new(project_root: &Path, invocation: CommandInvocation) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            invocation,
        }
    }

    /// Get the invocation to run.
    pub fn invocation(&self) -> &CommandInvocation {
        &self.invocation
    }
}

impl Command for ExecCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = resolve(&self.project_root)?;
        let resolver = platform_resolver();
        let interrupt = Interrupt::install()?;

        let code = execute(&root, self.invocation.clone(), resolver.as_ref(), &interrupt)?;
        Ok(CommandResult::from_exit_code(code))
    }
}
