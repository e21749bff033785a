//! Init command implementation.
//!
//! `vip --init [directory]` finds or creates the virtualenv for a directory
//! and installs its requirement files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{load_config, ConfigOverrides};
use crate::environment::{resolve_or_init, InitContext, VenvCreator};
use crate::error::Result;
use crate::requirements::PipInstaller;
use crate::shell::platform_resolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    directory: PathBuf,
    overrides: ConfigOverrides,
}

impl InitCommand {
    /// Create a new init command for `directory`, relative to `project_root`.
    pub fn new(project_root: &Path, directory: &Path, overrides: ConfigOverrides) -> Self {
        Self {
            directory: project_root.join(directory),
            overrides,
        }
    }

    /// Get the directory the environment is initialized for.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.directory)?.with_overrides(&self.overrides);
        debug!("Using settings {:?}", config);

        let resolver = platform_resolver();
        let creator = VenvCreator::new(config.python.as_str()).with_args(config.venv_args.clone());
        let installer = PipInstaller::new(resolver.as_ref());

        let ctx = InitContext {
            creator: &creator,
            installer: &installer,
            resolver: resolver.as_ref(),
            install_requirements: config.install_requirements,
            requirements_prefix: config.requirements_prefix.as_deref(),
        };

        let root = resolve_or_init(&self.directory, &ctx, ui)?;
        ui.success(&format!("Initialized virtualenv in {}", root.display()));

        Ok(CommandResult::success())
    }
}
