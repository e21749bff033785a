//! Interpreter version detection.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::shell::ExecutableResolver;

/// Matches `Python 3.11.4` (the micro part is optional).
static PYTHON_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("PYTHON_VERSION_REGEX must compile")
});

/// Extract version segments from `python --version` output.
///
/// # Example
///
/// ```
/// use vip::requirements::parse_python_version;
///
/// assert_eq!(
///     parse_python_version("Python 3.11.4\n"),
///     Some(vec!["3".to_string(), "11".to_string(), "4".to_string()])
/// );
/// assert_eq!(parse_python_version("command not found"), None);
/// ```
pub fn parse_python_version(output: &str) -> Option<Vec<String>> {
    let captures = PYTHON_VERSION_REGEX.captures(output)?;
    Some(
        captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().to_string())
            .collect(),
    )
}

/// Ask the environment's own `python` for its version.
///
/// Returns `None` when the interpreter is missing or its output is not
/// recognized; callers then fall back to version-less requirement files.
pub fn detect_python_version(root: &Path, resolver: &dyn ExecutableResolver) -> Option<Vec<String>> {
    let python = resolver.locate(root, "python").ok()?;

    let output = match Command::new(&python)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!("{} --version failed: {}", python.display(), output.status);
            return None;
        }
        Err(e) => {
            debug!("Cannot run {}: {}", python.display(), e);
            return None;
        }
    };

    // Python 2 prints its version to stderr.
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    let version = parse_python_version(&text);
    debug!("Detected interpreter version {:?}", version);
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_minor_only() {
        assert_eq!(
            parse_python_version("Python 2.7"),
            Some(vec!["2".to_string(), "7".to_string()])
        );
    }

    #[test]
    fn ignores_surrounding_noise() {
        assert_eq!(
            parse_python_version("warning: x\nPython 3.12.1+\n"),
            Some(vec!["3".to_string(), "12".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn rejects_unrelated_output() {
        assert_eq!(parse_python_version("pypy"), None);
        assert_eq!(parse_python_version(""), None);
    }

    #[cfg(unix)]
    #[test]
    fn detects_version_from_environment_interpreter() {
        use crate::shell::test_support::write_script;
        use crate::shell::BinResolver;

        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join(".vip");
        write_script(&root.join("bin").join("python"), "echo 'Python 3.9.18'\n");

        assert_eq!(
            detect_python_version(&root, &BinResolver),
            Some(vec!["3".to_string(), "9".to_string(), "18".to_string()])
        );
    }

    #[cfg(unix)]
    #[test]
    fn python2_version_on_stderr_is_detected() {
        use crate::shell::test_support::write_script;
        use crate::shell::BinResolver;

        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join(".vip");
        write_script(&root.join("bin").join("python"), "echo 'Python 2.7.18' >&2\n");

        assert_eq!(
            detect_python_version(&root, &BinResolver),
            Some(vec!["2".to_string(), "7".to_string(), "18".to_string()])
        );
    }

    #[test]
    fn missing_interpreter_yields_none() {
        let temp = tempfile::TempDir::new().unwrap();
        assert_eq!(detect_python_version(temp.path(), &crate::shell::BinResolver), None);
    }
}
