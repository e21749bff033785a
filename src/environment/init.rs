//! Resolve-or-create for `vip --init`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::creator::EnvironmentCreator;
use super::marker::PRIMARY_MARKER;
use super::resolver::{absolutize, resolve};
use crate::error::{Result, VipError};
use crate::requirements::{detect_python_version, find_requirement_files, DependencyInstaller};
use crate::shell::ExecutableResolver;
use crate::ui::UserInterface;

/// Collaborators and settings used while initializing an environment.
pub struct InitContext<'a> {
    /// Creates the virtualenv when none exists yet.
    pub creator: &'a dyn EnvironmentCreator,
    /// Installs requirement files into the environment.
    pub installer: &'a dyn DependencyInstaller,
    /// Locates executables (the environment's `python`) inside the environment.
    pub resolver: &'a dyn ExecutableResolver,
    /// Whether requirement files should be installed at all.
    pub install_requirements: bool,
    /// Optional requirement file prefix (`devel` selects `devel-requirements.txt`).
    pub requirements_prefix: Option<&'a str>,
}

/// Resolve the virtualenv governing `directory`, creating one if needed.
///
/// When no environment is found, `directory/.vip` is created with the
/// context's creator, unless something already exists at that path. The
/// result must be a directory. Requirement files found directly inside
/// `directory` are then installed into the environment.
///
/// # Errors
///
/// - [`VipError::NotADirectory`] when the environment path is not a directory
/// - [`VipError::CreationFailed`] / [`VipError::InstallFailed`] from the
///   collaborators
pub fn resolve_or_init(
    directory: &Path,
    ctx: &InitContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<PathBuf> {
    let directory = absolutize(directory)?;

    let root = match resolve(&directory) {
        Ok(existing) => {
            ui.warning(&format!("virtualenv already exists in {}", existing.display()));
            existing
        }
        Err(VipError::NotAnEnvironment { .. }) => {
            let target = directory.join(PRIMARY_MARKER);
            if target.exists() {
                ui.warning(&format!("{} already exists", target.display()));
            } else {
                info!("Creating virtualenv in {}", target.display());
                ctx.creator.create(&target)?;
            }
            target
        }
        Err(e) => return Err(e),
    };

    if !root.is_dir() {
        return Err(VipError::NotADirectory { path: root });
    }

    if ctx.install_requirements {
        install_requirements(&directory, &root, ctx, ui)?;
    }

    Ok(root)
}

fn install_requirements(
    directory: &Path,
    root: &Path,
    ctx: &InitContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let version = detect_python_version(root, ctx.resolver).unwrap_or_default();
    let files = find_requirement_files(directory, ctx.requirements_prefix, &version);

    if files.is_empty() {
        debug!("No requirement files in {}", directory.display());
        return Ok(());
    }

    for file in files {
        ui.message(&format!("Installing requirements from {}", file.display()));
        ctx.installer.install(root, &file)?;
    }

    Ok(())
}
