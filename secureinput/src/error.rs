use memlock::MemlockError;
use thiserror::Error;

/// Errors that can occur in the secureinput library.
///
/// End-of-input or a read error encountered in the middle of a capture is
/// deliberately absent here: it terminates the capture cleanly with the
/// partial content and is never surfaced as an error.
#[derive(Error, Debug)]
pub enum SecureInputError {
    /// A locked-memory allocation failed.
    ///
    /// The mapping or the pin request was denied by the operating system.
    /// The failed operation is fully rolled back; no partial state is
    /// retained.
    #[error("Failed to allocate locked memory: {0}")]
    AllocationFailed(#[from] MemlockError),

    /// The terminal could not be configured for a capture.
    ///
    /// Reading or applying line-discipline attributes on the controlling
    /// input device failed, so the capture never started.
    #[error("Terminal configuration failed: {0}")]
    TerminalConfigurationFailed(String),

    /// The terminal could not be restored after a capture.
    ///
    /// This is reported distinctly from a configuration failure: an
    /// interactive terminal must never be left silently stuck in raw,
    /// echo-disabled mode.
    #[error("Terminal restore failed: {0}")]
    TerminalRestoreFailed(String),

    /// An invalid capacity was specified for a password state.
    ///
    /// A capacity must leave room for at least one content byte plus the
    /// terminating sentinel.
    #[error("Invalid capacity: {0} (minimum is 2)")]
    InvalidCapacity(usize),
}

/// Result type for secureinput operations.
pub type Result<T> = std::result::Result<T, SecureInputError>;
