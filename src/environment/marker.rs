//! Marker directory names.

use std::ffi::OsStr;

/// Canonical marker directory; resolution always reports this name.
pub const PRIMARY_MARKER: &str = ".vip";

/// Every directory name that marks a project as having a virtualenv.
pub const MARKERS: &[&str] = &[PRIMARY_MARKER, ".venv"];

/// Check whether a directory entry name is a recognized marker.
pub fn is_marker(name: &OsStr) -> bool {
    MARKERS.iter().any(|marker| name == OsStr::new(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_marker_is_listed_first() {
        assert_eq!(MARKERS[0], PRIMARY_MARKER);
    }

    #[test]
    fn recognizes_all_markers() {
        assert!(is_marker(OsStr::new(".vip")));
        assert!(is_marker(OsStr::new(".venv")));
    }

    #[test]
    fn rejects_lookalikes() {
        assert!(!is_marker(OsStr::new("vip")));
        assert!(!is_marker(OsStr::new(".vip.yml")));
        assert!(!is_marker(OsStr::new(".VIP")));
    }
}
