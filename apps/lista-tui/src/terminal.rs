//! Raw mode and alternate screen, undone on drop.
//!
//! Whatever step of [`TerminalGuard::enter`] fails, the steps that already
//! succeeded are rolled back when the guard goes out of scope, so an early
//! `?` never leaves the shell in raw mode.

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Tracks which terminal modes are active.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        let mut guard = TerminalGuard::default();

        enable_raw_mode()?;
        guard.raw_mode = true;

        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;

        Ok(guard)
    }

    /// Whether anything still needs restoring.
    pub fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }

    /// Leaves the alternate screen and disables raw mode. Safe to call
    /// more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()?;
        }
        if self.alternate_screen {
            self.alternate_screen = false;
            execute!(io::stdout(), LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_guard_restores_nothing() {
        let mut guard = TerminalGuard::default();
        assert!(!guard.is_active());
        assert!(guard.restore().is_ok());
    }

    #[test]
    fn test_restore_clears_flags_once() {
        let mut guard = TerminalGuard {
            raw_mode: false,
            alternate_screen: true,
        };
        assert!(guard.is_active());

        guard.restore().unwrap();
        assert!(!guard.is_active());
        assert!(guard.restore().is_ok());
    }
}
