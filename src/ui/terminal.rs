//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, VipTheme};

/// Terminal UI implementation.
///
/// Plain messages (such as the path printed by `--locate`) go to stdout;
/// status and diagnostics go to stderr so they never mix with piped output.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: VipTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            VipTheme::new()
        } else {
            VipTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn cause(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_cause(msg)).ok();
    }
}

/// Create the UI for this invocation.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, !no_color && should_use_colors()))
}
