//! Virtualenv discovery and initialization.
//!
//! A project's virtualenv lives in a marker directory (`.vip`, or the
//! alternate `.venv`) somewhere between the working directory and the
//! filesystem root. This module finds it, and creates it on demand.
//!
//! - [`marker`] - Recognized marker directory names
//! - [`resolver`] - Upward directory walk ([`resolve`])
//! - [`creator`] - External virtualenv creation ([`EnvironmentCreator`])
//! - [`init`] - Resolve-or-create plus requirement installation ([`resolve_or_init`])

pub mod creator;
pub mod init;
pub mod marker;
pub mod resolver;

pub use creator::{EnvironmentCreator, VenvCreator};
pub use init::{resolve_or_init, InitContext};
pub use marker::{is_marker, MARKERS, PRIMARY_MARKER};
pub use resolver::{absolutize, is_filesystem_root, resolve};
