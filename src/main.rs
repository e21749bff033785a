//! vip CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vip::cli::{Cli, CommandDispatcher};
use vip::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with a dispatched command's stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vip=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vip=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vip starting with args: {:?}", cli);

    let mut ui = create_ui(OutputMode::from_verbose(cli.verbose), cli.no_color);

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.exception(&e);
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.exception(&e);
            ExitCode::from(1)
        }
    }
}
