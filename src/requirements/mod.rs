//! Requirement files and their installation.
//!
//! # Modules
//!
//! - [`files`] - Requirement file naming and discovery
//! - [`version`] - Interpreter version detection for version-specific files
//! - [`installer`] - Installing requirement files with the environment's pip

pub mod files;
pub mod installer;
pub mod version;

pub use files::{find_requirement_files, requirement_filenames, version_segments};
pub use installer::{DependencyInstaller, PipInstaller};
pub use version::{detect_python_version, parse_python_version};
