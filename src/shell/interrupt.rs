//! Ctrl+C tracking while a child process runs.
//!
//! The terminal delivers SIGINT to the whole foreground process group, so
//! the child sees it too. vip itself must not die on it: the handler only
//! raises a flag that the wait loop in [`execute`](super::execute) polls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;

use crate::error::Result;

/// Shared "an interrupt arrived" flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a flag that nothing raises except [`Interrupt::trigger`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag raised by the process's Ctrl+C handler.
    ///
    /// Only one handler can be installed per process.
    pub fn install() -> Result<Self> {
        let interrupt = Self::new();
        let flag = Arc::clone(&interrupt.flag);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .context("Failed to set Ctrl+C handler")?;

        Ok(interrupt)
    }

    /// Raise the flag.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt has arrived.
    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        assert!(!Interrupt::new().is_triggered());
    }

    #[test]
    fn trigger_is_visible_through_clones() {
        let interrupt = Interrupt::new();
        let observer = interrupt.clone();
        interrupt.trigger();
        assert!(observer.is_triggered());
    }
}
