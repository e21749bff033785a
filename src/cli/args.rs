//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct; [`Cli::mode`] turns the
//! parsed flags into exactly one [`Mode`].

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::shell::CommandInvocation;

/// Run commands from the nearest project virtualenv.
#[derive(Debug, Parser)]
#[command(name = "vip")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "vip command [args...]\n       \
                            vip --init [directory]\n       \
                            vip --locate [directory]")]
pub struct Cli {
    /// Initialize a brand new virtualenv in the given directory ("." by default)
    #[arg(short, long, value_name = "directory", num_args = 0..=1, default_missing_value = ".")]
    pub init: Option<PathBuf>,

    /// Show where the .vip directory is
    #[arg(short, long, value_name = "directory", num_args = 0..=1, default_missing_value = ".")]
    pub locate: Option<PathBuf>,

    /// Show verbose error messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Interpreter used to create the virtualenv
    #[arg(long, value_name = "interpreter", env = "VIP_PYTHON")]
    pub python: Option<String>,

    /// Also install <prefix>-requirements*.txt files
    #[arg(long, value_name = "prefix", env = "VIP_REQUIREMENTS_PREFIX")]
    pub requirements_prefix: Option<String>,

    /// Skip installing requirement files on --init
    #[arg(long)]
    pub no_install: bool,

    /// An executable in the .vip/bin directory, followed by its arguments
    #[arg(
        value_name = "command",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `--init [directory]`
    Init(PathBuf),
    /// `--locate [directory]`
    Locate(PathBuf),
    /// `command [args...]`
    Exec(CommandInvocation),
    /// Nothing requested.
    Help,
    /// More than one of init, locate and command.
    Ambiguous,
}

impl Cli {
    /// Select the mode, rejecting combinations.
    pub fn mode(&self) -> Mode {
        let requested = [
            self.init.is_some(),
            self.locate.is_some(),
            !self.command.is_empty(),
        ]
        .iter()
        .filter(|&&used| used)
        .count();

        if requested > 1 {
            return Mode::Ambiguous;
        }

        if let Some(directory) = &self.init {
            Mode::Init(directory.clone())
        } else if let Some(directory) = &self.locate {
            Mode::Locate(directory.clone())
        } else if let Some(invocation) = CommandInvocation::from_words(self.command.clone()) {
            Mode::Exec(invocation)
        } else {
            Mode::Help
        }
    }

    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            python: self.python.clone(),
            requirements_prefix: self.requirements_prefix.clone(),
            no_install: self.no_install,
        }
    }
}
