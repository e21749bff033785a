//! Error types for vip operations.
//!
//! This module defines [`VipError`], the single error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every domain failure is a `VipError` variant and bubbles up with `?`
//! - `main` reports the error once as `fatal: ...` and exits non-zero
//! - Wrapped failures keep the underlying error as `source()` so verbose
//!   mode can print the whole chain

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vip operations.
#[derive(Debug, Error)]
pub enum VipError {
    /// No environment marker in the start directory or any of its ancestors.
    #[error("not a virtualenv (or any of the parent directories): {start}")]
    NotAnEnvironment { start: PathBuf },

    /// The requested command has no usable executable in the environment.
    #[error("command '{command}' not found or is not executable: {path}")]
    ExecutableNotFound { command: String, path: PathBuf },

    /// A path that must be a directory is a file (or missing).
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Spawning or waiting on a child process failed.
    #[error("failed to execute {program}: {source}")]
    Execution {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external environment creator failed.
    #[error("failed to create virtualenv in {path}: {message}")]
    CreationFailed { path: PathBuf, message: String },

    /// The external dependency installer failed.
    #[error("failed to install requirements from {requirements}: {message}")]
    InstallFailed {
        requirements: PathBuf,
        message: String,
    },

    /// Failed to parse a settings file.
    #[error("failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vip operations.
pub type Result<T> = std::result::Result<T, VipError>;
