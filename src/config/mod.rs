//! Settings for environment creation.
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. Project settings file (`.vip.yml` in the `--init` directory)
//! 3. Environment variables and command-line flags
//!
//! # Example
//!
//! ```
//! use vip::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".vip.yml"), "python: python3.11").unwrap();
//!
//! let overrides = ConfigOverrides { no_install: true, ..Default::default() };
//! let config = load_config(temp.path()).unwrap().with_overrides(&overrides);
//! assert_eq!(config.python, "python3.11");
//! assert!(!config.install_requirements);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, parse_config, CONFIG_FILE};
pub use schema::{ConfigOverrides, VipConfig};
