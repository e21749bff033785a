//! Virtualenv creation.
//!
//! Creating the environment itself is delegated to Python's `venv` module.
//! The [`EnvironmentCreator`] seam lets tests substitute a fake.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, VipError};
use crate::shell::describe_status;

/// Populates a directory with a runnable virtualenv.
pub trait EnvironmentCreator {
    /// Create a virtualenv at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VipError::CreationFailed`] when the environment could not
    /// be created.
    fn create(&self, path: &Path) -> Result<()>;
}

/// Creates environments by running `<python> -m venv [args...] <path>`.
#[derive(Debug, Clone)]
pub struct VenvCreator {
    python: String,
    venv_args: Vec<String>,
}

impl VenvCreator {
    /// Create a creator that uses the given interpreter.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            venv_args: Vec::new(),
        }
    }

    /// Extra arguments passed to `venv` before the target path.
    pub fn with_args(mut self, venv_args: Vec<String>) -> Self {
        self.venv_args = venv_args;
        self
    }

    /// The interpreter this creator runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl EnvironmentCreator for VenvCreator {
    fn create(&self, path: &Path) -> Result<()> {
        debug!(
            "Creating virtualenv: {} -m venv {:?} {}",
            self.python,
            self.venv_args,
            path.display()
        );

        let status = Command::new(&self.python)
            .args(["-m", "venv"])
            .args(&self.venv_args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| VipError::CreationFailed {
                path: path.to_path_buf(),
                message: format!("could not run {}: {}", self.python, e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(VipError::CreationFailed {
                path: path.to_path_buf(),
                message: format!("{} {}", self.python, describe_status(status)),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::shell::test_support::write_script;
    use tempfile::TempDir;

    #[test]
    fn runs_venv_module_with_target_path() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("fake-python");
        write_script(&python, "[ \"$1 $2\" = \"-m venv\" ] || exit 3\nmkdir -p \"$3/bin\"\n");

        let target = temp.path().join("project").join(".vip");
        VenvCreator::new(python.to_string_lossy())
            .create(&target)
            .unwrap();

        assert!(target.join("bin").is_dir());
    }

    #[test]
    fn passes_extra_arguments_before_target() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("fake-python");
        write_script(
            &python,
            "[ \"$3\" = \"--system-site-packages\" ] || exit 4\nmkdir -p \"$4\"\n",
        );

        let target = temp.path().join(".vip");
        VenvCreator::new(python.to_string_lossy())
            .with_args(vec!["--system-site-packages".to_string()])
            .create(&target)
            .unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn non_zero_exit_is_creation_failure() {
        let temp = TempDir::new().unwrap();
        let python = temp.path().join("fake-python");
        write_script(&python, "exit 2\n");

        let err = VenvCreator::new(python.to_string_lossy())
            .create(&temp.path().join(".vip"))
            .unwrap_err();

        assert!(matches!(err, VipError::CreationFailed { .. }));
        assert!(err.to_string().contains("exited with code 2"));
    }

    #[test]
    fn missing_interpreter_is_creation_failure() {
        let temp = TempDir::new().unwrap();
        let err = VenvCreator::new("/nonexistent/python-for-vip-tests")
            .create(&temp.path().join(".vip"))
            .unwrap_err();

        assert!(matches!(err, VipError::CreationFailed { .. }));
        assert!(err.to_string().contains("could not run"));
    }
}
