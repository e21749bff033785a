//! Locate command implementation.

use std::path::{Path, PathBuf};

use crate::environment::resolve;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the environment governing a directory.
pub struct LocateCommand {
    directory: PathBuf,
}

impl LocateCommand {
    /// Create a new locate command for `directory`, relative to `project_root`.
    pub fn new(project_root: &Path, directory: &Path) -> Self {
        Self {
            directory: project_root.join(directory),
        }
    }
}

impl Command for LocateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = resolve(&self.directory)?;
        ui.message(&root.display().to_string());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prints_environment_path() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".vip")).unwrap();
        fs::create_dir_all(temp.path().join("src/pkg")).unwrap();

        let cmd = LocateCommand::new(temp.path(), Path::new("src/pkg"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);

        let expected = resolve(temp.path()).unwrap();
        assert_eq!(ui.messages(), &[expected.display().to_string()]);
    }

    #[test]
    fn missing_environment_is_an_error() {
        let temp = TempDir::new().unwrap();
        if temp.path().parent().is_some_and(|p| resolve(p).is_ok()) {
            return;
        }

        let cmd = LocateCommand::new(temp.path(), Path::new("."));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(err.to_string().contains("not a virtualenv"));
        assert!(ui.messages().is_empty());
    }
}
