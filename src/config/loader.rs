//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::VipConfig;
use crate::error::{Result, VipError};

/// Settings file name, looked up in the project directory.
pub const CONFIG_FILE: &str = ".vip.yml";

/// Path of the settings file for a project directory.
pub fn config_path(directory: &Path) -> PathBuf {
    directory.join(CONFIG_FILE)
}

/// Load settings for a project directory.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(directory: &Path) -> Result<VipConfig> {
    let path = config_path(directory);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(VipConfig::default());
        }
        Err(e) => return Err(VipError::Io(e)),
    };

    parse_config(&content, &path)
}

/// Parse YAML content into VipConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<VipConfig> {
    let parse_error = |e: serde_yaml::Error| VipError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(VipConfig::default());
    }

    serde_yaml::from_value(value).map_err(parse_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(temp.path()).unwrap(), VipConfig::default());
    }

    #[test]
    fn loads_partial_settings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            config_path(temp.path()),
            "python: python3.12\nrequirements_prefix: devel\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.python, "python3.12");
        assert_eq!(config.requirements_prefix.as_deref(), Some("devel"));
        assert!(config.install_requirements);
    }

    #[test]
    fn comment_only_file_yields_defaults() {
        let config = parse_config("# nothing here\n", Path::new(".vip.yml")).unwrap();
        assert_eq!(config, VipConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_config("pyhton: python3\n", Path::new(".vip.yml")).unwrap_err();
        assert!(matches!(err, VipError::ConfigParseError { .. }));
        assert!(err.to_string().contains(".vip.yml"));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("venv_args: [unclosed\n", Path::new("/p/.vip.yml")).unwrap_err();
        assert!(matches!(err, VipError::ConfigParseError { .. }));
    }
}
