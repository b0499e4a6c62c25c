use crate::error::{Result, SecureInputError};
use log::{debug, warn};
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

/// One saved line-discipline configuration.
///
/// `original` is the snapshot taken at [`TerminalState::save`] and is never
/// mutated afterwards; it is the ground truth every capture restores to.
/// `working` is the mutable copy used to toggle echo and canonical mode for
/// the duration of a capture.
pub struct TerminalState {
    fd: RawFd,
    original: libc::termios,
    working: libc::termios,
}

/// Clears echo and canonical mode and configures single-byte blocking reads
/// (return after exactly one byte, no inter-byte timeout).
fn set_raw_flags(attrs: &mut libc::termios) {
    attrs.c_lflag &= !(libc::ECHO | libc::ICANON);
    attrs.c_cc[libc::VMIN] = 1;
    attrs.c_cc[libc::VTIME] = 0;
}

/// Re-sets echo and canonical mode.
fn set_cooked_flags(attrs: &mut libc::termios) {
    attrs.c_lflag |= libc::ECHO | libc::ICANON;
}

impl TerminalState {
    /// Snapshots the line discipline of standard input.
    pub fn save() -> Result<Self> {
        Self::save_fd(libc::STDIN_FILENO)
    }

    /// Snapshots the line discipline of an arbitrary terminal descriptor.
    pub fn save_fd(fd: RawFd) -> Result<Self> {
        let mut attrs = MaybeUninit::<libc::termios>::uninit();
        let result = unsafe { libc::tcgetattr(fd, attrs.as_mut_ptr()) };
        if result != 0 {
            return Err(SecureInputError::TerminalConfigurationFailed(format!(
                "could not read attributes of fd {} [Err: {}]",
                fd,
                std::io::Error::last_os_error()
            )));
        }
        let original = unsafe { attrs.assume_init() };
        Ok(Self {
            fd,
            original,
            working: original,
        })
    }

    /// Disables echo and canonical mode on the terminal.
    ///
    /// Reads will block until exactly one byte is available. Idempotent if
    /// called twice without an intervening restore.
    pub fn disable_echo(&mut self) -> Result<()> {
        set_raw_flags(&mut self.working);
        self.apply_working()?;
        debug!("terminal echo disabled on fd {}", self.fd);
        Ok(())
    }

    /// Re-enables echo and canonical mode on the working configuration.
    ///
    /// This restores interactive behavior without touching the saved
    /// `original` snapshot.
    pub fn enable_echo(&mut self) -> Result<()> {
        set_cooked_flags(&mut self.working);
        self.apply_working()?;
        debug!("terminal echo re-enabled on fd {}", self.fd);
        Ok(())
    }

    /// Applies the saved `original` configuration verbatim.
    ///
    /// This must run on every exit path from a capture; a failure here is
    /// reported as [`SecureInputError::TerminalRestoreFailed`], distinct
    /// from input-related failures, because it leaves an interactive
    /// terminal broken.
    pub fn restore(&self) -> Result<()> {
        let result = unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.original) };
        if result != 0 {
            return Err(SecureInputError::TerminalRestoreFailed(format!(
                "could not restore attributes of fd {} [Err: {}]",
                self.fd,
                std::io::Error::last_os_error()
            )));
        }
        debug!("terminal state restored on fd {}", self.fd);
        Ok(())
    }

    fn apply_working(&self) -> Result<()> {
        let result = unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.working) };
        if result != 0 {
            return Err(SecureInputError::TerminalConfigurationFailed(format!(
                "could not apply attributes to fd {} [Err: {}]",
                self.fd,
                std::io::Error::last_os_error()
            )));
        }
        Ok(())
    }
}

/// Scoped raw-mode span: echo is disabled on construction and the original
/// configuration is restored when the guard goes away.
///
/// Callers that need to surface a restore failure call [`RawModeGuard::restore`]
/// explicitly; the `Drop` fallback still restores on panic and early-return
/// paths, logging if the attempt fails.
pub struct RawModeGuard<'term> {
    terminal: &'term mut TerminalState,
    restored: bool,
}

impl<'term> RawModeGuard<'term> {
    /// Enters raw mode, failing without side effects if the terminal cannot
    /// be configured.
    pub fn new(terminal: &'term mut TerminalState) -> Result<Self> {
        terminal.disable_echo()?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Restores the original configuration, consuming the guard.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        self.terminal.restore()
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = self.terminal.restore() {
                warn!("terminal left unrestored: {}", e);
            }
        }
    }
}
