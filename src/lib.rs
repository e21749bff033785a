//! vip - run commands from the nearest project virtualenv.
//!
//! vip walks up from a directory looking for a `.vip` (or `.venv`)
//! virtualenv, creates one on request, and runs executables from its bin
//! directory with the caller's arguments.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.vip.yml` settings and overrides
//! - [`environment`] - Virtualenv resolution and creation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Requirement file discovery and installation
//! - [`shell`] - Executable lookup and child process execution
//! - [`ui`] - Terminal output and reporting
//!
//! # Example
//!
//! ```
//! use vip::environment::resolve;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir(temp.path().join(".vip")).unwrap();
//! fs::create_dir_all(temp.path().join("src/app")).unwrap();
//!
//! let root = resolve(&temp.path().join("src/app")).unwrap();
//! assert!(root.ends_with(".vip"));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, VipError};
