//! Requirement installation.
//!
//! Installing packages is delegated to the environment's own `pip`. The
//! [`DependencyInstaller`] seam lets tests substitute a fake.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{Result, VipError};
use crate::shell::{describe_status, ExecutableResolver};

/// Installs a requirements file into an environment.
pub trait DependencyInstaller {
    /// Install every package listed in `requirements` into `environment`.
    ///
    /// # Errors
    ///
    /// Returns [`VipError::InstallFailed`] when installation fails.
    fn install(&self, environment: &Path, requirements: &Path) -> Result<()>;
}

/// Runs `<environment>/bin/pip install -r <requirements>`.
pub struct PipInstaller<'a> {
    resolver: &'a dyn ExecutableResolver,
}

impl<'a> PipInstaller<'a> {
    /// Create an installer that finds `pip` through `resolver`.
    pub fn new(resolver: &'a dyn ExecutableResolver) -> Self {
        Self { resolver }
    }
}

impl DependencyInstaller for PipInstaller<'_> {
    fn install(&self, environment: &Path, requirements: &Path) -> Result<()> {
        let install_failed = |message: String| VipError::InstallFailed {
            requirements: requirements.to_path_buf(),
            message,
        };

        let pip = self
            .resolver
            .locate(environment, "pip")
            .map_err(|e| install_failed(e.to_string()))?;

        info!("Running {} install -r {}", pip.display(), requirements.display());

        let status = Command::new(&pip)
            .args(["install", "-r"])
            .arg(requirements)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| install_failed(format!("could not run {}: {}", pip.display(), e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(install_failed(format!("pip {}", describe_status(status))))
        }
    }
}
