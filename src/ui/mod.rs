//! User-facing reporting.
//!
//! This module provides:
//! - [`UserInterface`] trait for reporting abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Verbosity is carried by the UI object ([`OutputMode`]), which `main`
//! builds once per invocation.
//!
//! # Example
//!
//! ```
//! use vip::ui::{MockUI, OutputMode, UserInterface};
//! use vip::VipError;
//!
//! let mut ui = MockUI::with_mode(OutputMode::Verbose);
//! let err = VipError::NotADirectory { path: "/p/.vip".into() };
//! ui.exception(&err);
//! assert!(ui.has_error("fatal: not a directory: /p/.vip"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VipTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display one link of an error's cause chain.
    fn cause(&mut self, msg: &str);

    /// Report a fatal error.
    ///
    /// Verbose mode also walks the error's `source()` chain.
    fn exception(&mut self, err: &dyn std::error::Error) {
        self.error(&format!("fatal: {}", err));

        if self.output_mode().shows_details() {
            let mut source = err.source();
            while let Some(cause) = source {
                self.cause(&cause.to_string());
                source = cause.source();
            }
        }
    }
}
