//! Requirement file discovery.
//!
//! Projects can split their requirements by purpose and interpreter version.
//! File names follow the pattern
//!
//! ```text
//! [prefix-]requirements[-version].txt
//! ```
//!
//! where `version` grows one segment at a time, so Python 3.11.4 with prefix
//! `devel` considers `requirements.txt`, `requirements-3.txt`,
//! `requirements-311.txt`, `requirements-3114.txt` and then the same four
//! names starting with `devel-`.

use std::path::{Path, PathBuf};

/// Generate candidate requirement file names, in install order.
///
/// Empty and `.` version segments are ignored, as is an empty prefix.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use vip::requirements::requirement_filenames;
///
/// let names = requirement_filenames(None, Some("devel"), &["2", "7"]);
/// assert_eq!(
///     names,
///     [
///         "requirements.txt",
///         "requirements-2.txt",
///         "requirements-27.txt",
///         "devel-requirements.txt",
///         "devel-requirements-2.txt",
///         "devel-requirements-27.txt",
///     ]
///     .map(PathBuf::from)
/// );
/// ```
pub fn requirement_filenames<S: AsRef<str>>(
    source_dir: Option<&Path>,
    prefix: Option<&str>,
    version: &[S],
) -> Vec<PathBuf> {
    let mut prefixes = vec![String::new()];
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        prefixes.push(format!("{}-", prefix));
    }

    let segments: Vec<&str> = version
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    let mut suffixes = vec![String::new()];
    for i in 1..=segments.len() {
        suffixes.push(format!("-{}", segments[..i].concat()));
    }

    let mut names = Vec::with_capacity(prefixes.len() * suffixes.len());
    for prefix in &prefixes {
        for suffix in &suffixes {
            let name = format!("{}requirements{}.txt", prefix, suffix);
            names.push(match source_dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            });
        }
    }
    names
}

/// Split a dotted version string into segments (`"3.11"` gives `3`, `11`).
pub fn version_segments(version: &str) -> Vec<String> {
    version
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Requirement files that exist directly inside `dir`, in install order.
pub fn find_requirement_files<S: AsRef<str>>(
    dir: &Path,
    prefix: Option<&str>,
    version: &[S],
) -> Vec<PathBuf> {
    requirement_filenames(Some(dir), prefix, version)
        .into_iter()
        .filter(|path| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names<S: AsRef<str>>(prefix: Option<&str>, version: &[S]) -> Vec<String> {
        requirement_filenames(None, prefix, version)
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn empty_prefix_and_version() {
        assert_eq!(names::<&str>(Some(""), &[]), vec!["requirements.txt"]);
    }

    #[test]
    fn prefix_and_version() {
        assert_eq!(
            names(Some("devel"), &["2", "7", "3"]),
            vec![
                "requirements.txt",
                "requirements-2.txt",
                "requirements-27.txt",
                "requirements-273.txt",
                "devel-requirements.txt",
                "devel-requirements-2.txt",
                "devel-requirements-27.txt",
                "devel-requirements-273.txt",
            ]
        );
    }

    #[test]
    fn no_prefix() {
        assert_eq!(
            names(None, &["2", "7", "3"]),
            vec![
                "requirements.txt",
                "requirements-2.txt",
                "requirements-27.txt",
                "requirements-273.txt",
            ]
        );
    }

    #[test]
    fn version_as_dotted_string() {
        assert_eq!(
            names(None, &version_segments("2.1")),
            vec!["requirements.txt", "requirements-2.txt", "requirements-21.txt"]
        );
    }

    #[test]
    fn dot_and_empty_segments_are_ignored() {
        assert_eq!(
            names(None, &["3", ".", "", "11"]),
            vec!["requirements.txt", "requirements-3.txt", "requirements-311.txt"]
        );
    }

    #[test]
    fn source_dir_is_joined() {
        let dir = Path::new("project");
        assert_eq!(
            requirement_filenames(Some(dir), None, &["2"]),
            vec![dir.join("requirements.txt"), dir.join("requirements-2.txt")]
        );
    }

    #[test]
    fn version_segments_splits_on_dots() {
        assert_eq!(version_segments("3.11.4"), vec!["3", "11", "4"]);
        assert_eq!(version_segments(""), Vec::<String>::new());
    }

    #[test]
    fn finds_only_existing_files_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("devel-requirements.txt"), "pytest").unwrap();
        fs::write(temp.path().join("requirements-3.txt"), "attrs").unwrap();
        fs::write(temp.path().join("requirements.txt"), "requests").unwrap();
        fs::create_dir_all(temp.path().join("requirements-311.txt")).unwrap();

        let found = find_requirement_files(temp.path(), Some("devel"), &["3", "11"]);
        assert_eq!(
            found,
            vec![
                temp.path().join("requirements.txt"),
                temp.path().join("requirements-3.txt"),
                temp.path().join("devel-requirements.txt"),
            ]
        );
    }
}
