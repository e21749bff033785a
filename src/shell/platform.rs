//! Platform-specific executable checks.

use std::path::Path;

/// Extensions Windows treats as executable when `PATHEXT` is unset.
pub const DEFAULT_PATHEXT: &str = ".exe;.cmd;.bat;.py;.pyw";

/// Check whether the current user may execute `path`.
///
/// Uses `access(2)` with `X_OK`, so the answer accounts for ownership and
/// group membership rather than just the mode bits.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse a `PATHEXT`-style list into lowercase extensions.
///
/// Entries are separated by `;`. Blank entries are ignored, and an unset or
/// blank list falls back to [`DEFAULT_PATHEXT`].
pub fn parse_pathext(value: Option<&str>) -> Vec<String> {
    let split = |list: &str| -> Vec<String> {
        list.split(';')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(str::to_ascii_lowercase)
            .collect()
    };

    let extensions = value.map(split).unwrap_or_default();
    if extensions.is_empty() {
        split(DEFAULT_PATHEXT)
    } else {
        extensions
    }
}
