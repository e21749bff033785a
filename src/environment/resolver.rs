//! Virtualenv directory resolution.
//!
//! Walks from a start directory towards the filesystem root and stops at the
//! first ancestor that holds a marker directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::marker::{is_marker, PRIMARY_MARKER};
use crate::error::{Result, VipError};

/// Find the virtualenv that governs `start`.
///
/// Returns `<ancestor>/.vip` for the nearest ancestor (including `start`
/// itself) that contains a marker directory. The primary marker name is
/// reported even when the ancestor only holds an alternate marker.
///
/// Marker-named regular files are ignored.
///
/// # Errors
///
/// Returns [`VipError::NotAnEnvironment`] when the walk reaches the
/// filesystem root without a match.
///
/// # Example
///
/// ```
/// use vip::environment::resolve;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// std::fs::create_dir_all(temp.path().join(".vip")).unwrap();
/// std::fs::create_dir_all(temp.path().join("src/app")).unwrap();
///
/// let found = resolve(&temp.path().join("src/app")).unwrap();
/// assert_eq!(found, temp.path().join(".vip"));
/// ```
pub fn resolve(start: &Path) -> Result<PathBuf> {
    let start = absolutize(start)?;
    let mut candidate = start.clone();

    loop {
        debug!("Looking for a virtualenv in {}", candidate.display());

        if has_marker(&candidate) {
            let found = candidate.join(PRIMARY_MARKER);
            debug!("Resolved virtualenv {}", found.display());
            return Ok(found);
        }

        if is_filesystem_root(&candidate) || !candidate.pop() {
            break;
        }
    }

    Err(VipError::NotAnEnvironment { start })
}

/// Make a path absolute and fold `.` and `..` components lexically.
///
/// Symlinks are not resolved, so the result stays inside the tree the user
/// pointed at.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    Ok(normalized)
}

/// Check whether `path` is a filesystem root.
///
/// Recognizes the POSIX root and drive roots written with either separator
/// (`C:\` and `C:/`).
pub fn is_filesystem_root(path: &Path) -> bool {
    let text = path.to_string_lossy();
    match text.as_bytes() {
        [b'/'] | [b'\\'] => true,
        [drive, b':', b'\\' | b'/'] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

fn has_marker(candidate: &Path) -> bool {
    let entries = match fs::read_dir(candidate) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", candidate.display(), e);
            return false;
        }
    };

    entries
        .flatten()
        .any(|entry| is_marker(&entry.file_name()) && entry.path().is_dir())
}
