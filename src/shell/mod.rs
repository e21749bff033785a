//! Executable lookup and command execution inside a virtualenv.

pub mod command;
pub mod executable;
pub mod interrupt;
pub mod platform;

pub use command::{
    describe_status, execute, exit_code, CommandInvocation, INTERRUPTED_EXIT_CODE,
};
pub use executable::{platform_resolver, BinResolver, ExecutableResolver, ScriptsResolver};
pub use interrupt::Interrupt;
pub use platform::{is_executable, parse_pathext, DEFAULT_PATHEXT};
