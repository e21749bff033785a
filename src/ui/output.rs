//! Output verbosity.

/// How much detail to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Terse fatal messages.
    #[default]
    Normal,
    /// Fatal messages with their full cause chain.
    Verbose,
}

impl OutputMode {
    /// Pick the mode for the `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode reports error causes.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
