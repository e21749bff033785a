//! Running commands inside a virtualenv.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::executable::ExecutableResolver;
use super::interrupt::Interrupt;
use crate::error::{Result, VipError};

/// Exit code reported when an interrupted child leaves no status of its own.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// How often the wait loop checks the child and the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How long an interrupted child gets to exit after SIGTERM before SIGKILL.
const TERMINATE_GRACE: Duration = Duration::from_secs(2);

/// A command name and its arguments, as typed after `vip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Executable name inside the environment's bin directory.
    pub command: String,

    /// Arguments passed through verbatim.
    pub arguments: Vec<String>,
}

impl CommandInvocation {
    /// Create an invocation.
    pub fn new(command: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            command: command.into(),
            arguments,
        }
    }

    /// Split `[command, args...]` into an invocation.
    ///
    /// Returns `None` for an empty list.
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        let mut words = words.into_iter();
        let command = words.next()?;
        Some(Self::new(command, words.collect()))
    }
}

/// Run a command from the environment at `root` and return its exit code.
///
/// The executable is located first; nothing is spawned if that fails. The
/// child inherits stdout and stderr, and its stdin is closed right after
/// spawning. The call blocks until the child exits.
///
/// When `interrupt` is raised during the wait, the child is terminated if
/// it is still running, and its status (or [`INTERRUPTED_EXIT_CODE`]) is
/// returned instead of an error. The child is reaped on every path.
///
/// # Errors
///
/// - [`VipError::ExecutableNotFound`] if the command cannot be located
/// - [`VipError::Execution`] if spawning or waiting fails
pub fn execute(
    root: &Path,
    invocation: CommandInvocation,
    resolver: &dyn ExecutableResolver,
    interrupt: &Interrupt,
) -> Result<i32> {
    let program = resolver.locate(root, &invocation.command)?;
    debug!(
        "Spawning {} with args {:?}",
        program.display(),
        invocation.arguments
    );

    let child = Command::new(&program)
        .args(&invocation.arguments)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| VipError::Execution {
            program: program.clone(),
            source,
        })?;

    let mut guard = ChildGuard::new(child, program);
    guard.close_stdin();
    let code = guard.wait(interrupt)?;

    debug!("Command exited with code {}", code);
    Ok(code)
}

/// Map an exit status to a shell-style exit code.
///
/// A POSIX child killed by a signal maps to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    INTERRUPTED_EXIT_CODE
}

/// Describe how a process ended, for error messages.
pub fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with code {}", code),
        None => format!("was terminated ({})", status),
    }
}

/// Owns a running child and reaps it on drop.
struct ChildGuard {
    child: Child,
    program: PathBuf,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child, program: PathBuf) -> Self {
        Self {
            child,
            program,
            reaped: false,
        }
    }

    fn close_stdin(&mut self) {
        drop(self.child.stdin.take());
    }

    fn wait(&mut self, interrupt: &Interrupt) -> Result<i32> {
        loop {
            if let Some(status) = self.try_wait()? {
                return Ok(exit_code(status));
            }

            if interrupt.is_triggered() {
                debug!("Interrupted while waiting on {}", self.program.display());
                return self.terminate();
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Stop the child, politely first, and return its final code.
    fn terminate(&mut self) -> Result<i32> {
        if let Some(status) = self.try_wait()? {
            return Ok(exit_code(status));
        }

        request_termination(&mut self.child);

        let deadline = Instant::now() + TERMINATE_GRACE;
        while Instant::now() < deadline {
            if let Some(status) = self.try_wait()? {
                return Ok(status.code().unwrap_or(INTERRUPTED_EXIT_CODE));
            }
            thread::sleep(POLL_INTERVAL);
        }

        // kill() fails harmlessly if the child exited in the meantime
        let _ = self.child.kill();
        let status = self.child.wait().map_err(|source| self.execution_error(source))?;
        self.reaped = true;
        Ok(status.code().unwrap_or(INTERRUPTED_EXIT_CODE))
    }

    fn try_wait(&mut self) -> Result<Option<ExitStatus>> {
        let status = self
            .child
            .try_wait()
            .map_err(|source| self.execution_error(source))?;
        if status.is_some() {
            self.reaped = true;
        }
        Ok(status)
    }

    fn execution_error(&self, source: std::io::Error) -> VipError {
        VipError::Execution {
            program: self.program.clone(),
            source,
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        if let Ok(None) = self.child.try_wait() {
            debug!("Killing {}", self.program.display());
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
fn request_termination(child: &mut Child) {
    let Ok(pid) = libc::pid_t::try_from(child.id()) else {
        let _ = child.kill();
        return;
    };
    // SAFETY: the pid belongs to our own unreaped child, so it cannot have
    // been recycled for another process
    unsafe {
        libc::kill(pid, libc::SIGTERM);
    }
}

#[cfg(not(unix))]
fn request_termination(child: &mut Child) {
    let _ = child.kill();
}
