//! Executable lookup inside a virtualenv.
//!
//! POSIX virtualenvs keep scripts in `bin/` and rely on permission bits;
//! Windows ones keep them in `Scripts/` and rely on file extensions. Both
//! strategies sit behind [`ExecutableResolver`], and [`platform_resolver`]
//! picks one once at startup.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::platform::{is_executable, parse_pathext};
use crate::error::{Result, VipError};

/// Finds a command's executable inside an environment root.
pub trait ExecutableResolver {
    /// Directory holding the environment's executables.
    fn bin_dir(&self, root: &Path) -> PathBuf;

    /// Locate `command` inside the environment at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`VipError::ExecutableNotFound`] when there is no usable
    /// executable for `command`.
    fn locate(&self, root: &Path, command: &str) -> Result<PathBuf>;
}

/// Pick the resolver matching the current platform.
pub fn platform_resolver() -> Box<dyn ExecutableResolver> {
    if cfg!(windows) {
        Box::new(ScriptsResolver::from_env())
    } else {
        Box::new(BinResolver)
    }
}

/// POSIX layout: `<root>/bin/<command>` with the executable bit set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinResolver;

impl ExecutableResolver for BinResolver {
    fn bin_dir(&self, root: &Path) -> PathBuf {
        root.join("bin")
    }

    fn locate(&self, root: &Path, command: &str) -> Result<PathBuf> {
        let candidate = self.bin_dir(root).join(command);
        debug!("Checking {}", candidate.display());

        if is_bare_name(command) && candidate.is_file() && is_executable(&candidate) {
            Ok(candidate)
        } else {
            Err(not_found(command, candidate))
        }
    }
}

/// Windows layout: `<root>/Scripts/<command>[.ext]`, driven by `PATHEXT`.
#[derive(Debug, Clone)]
pub struct ScriptsResolver {
    extensions: Vec<String>,
}

impl ScriptsResolver {
    /// Create a resolver with an explicit extension list (in search order).
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Create a resolver from the `PATHEXT` environment variable.
    pub fn from_env() -> Self {
        let pathext = std::env::var("PATHEXT").ok();
        Self::new(parse_pathext(pathext.as_deref()))
    }

    /// The recognized extensions, lowercase, in search order.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn has_executable_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_ascii_lowercase()))
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

impl Default for ScriptsResolver {
    fn default() -> Self {
        Self::new(parse_pathext(None))
    }
}

impl ExecutableResolver for ScriptsResolver {
    fn bin_dir(&self, root: &Path) -> PathBuf {
        root.join("Scripts")
    }

    fn locate(&self, root: &Path, command: &str) -> Result<PathBuf> {
        let base = self.bin_dir(root).join(command);
        if !is_bare_name(command) {
            return Err(not_found(command, base));
        }

        if base.is_file() && self.has_executable_extension(&base) {
            return Ok(base);
        }

        for ext in &self.extensions {
            let candidate = with_suffix(&base, ext);
            debug!("Checking {}", candidate.display());
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        // Last resort: the bare file, even with an unrecognized extension.
        if base.is_file() {
            return Ok(base);
        }

        Err(not_found(command, base))
    }
}

/// Commands are looked up by name only; paths would escape the environment.
fn is_bare_name(command: &str) -> bool {
    !command.is_empty()
        && command != "."
        && command != ".."
        && !command.contains(['/', '\\'])
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn not_found(command: &str, path: PathBuf) -> VipError {
    VipError::ExecutableNotFound {
        command: command.to_string(),
        path,
    }
}
