//! Settings schema for `.vip.yml`.

use serde::Deserialize;

/// Settings that control how environments are created and populated.
///
/// Every field is optional in the file; missing ones take the defaults.
///
/// ```yaml
/// python: python3.12
/// venv_args: ["--system-site-packages"]
/// install_requirements: true
/// requirements_prefix: devel
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VipConfig {
    /// Interpreter used to create new environments.
    pub python: String,

    /// Extra arguments for `python -m venv`.
    pub venv_args: Vec<String>,

    /// Whether `--init` installs requirement files.
    pub install_requirements: bool,

    /// Also install `<prefix>-requirements*.txt` files.
    pub requirements_prefix: Option<String>,
}

impl Default for VipConfig {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            venv_args: Vec::new(),
            install_requirements: true,
            requirements_prefix: None,
        }
    }
}

/// Values from the command line and environment that beat the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--python` / `VIP_PYTHON`
    pub python: Option<String>,

    /// `--requirements-prefix` / `VIP_REQUIREMENTS_PREFIX`
    pub requirements_prefix: Option<String>,

    /// `--no-install`
    pub no_install: bool,
}

impl VipConfig {
    /// Layer overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(python) = &overrides.python {
            self.python = python.clone();
        }
        if let Some(prefix) = &overrides.requirements_prefix {
            self.requirements_prefix = Some(prefix.clone());
        }
        if overrides.no_install {
            self.install_requirements = false;
        }
        self
    }
}
