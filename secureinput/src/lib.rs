//! # Secure Input
//!
//! A library for capturing short secrets (passwords) at a terminal without
//! leaving traces of them anywhere they could be recovered.
//!
//! The `secureinput` library protects a secret between the moment of
//! keystroke and the moment it is handed to a caller or destroyed:
//!
//! - **Locked buffers**: every byte of a secret lives in memory pinned
//!   against swap (via the `memlock` crate) and is wiped before release,
//!   on every path including errors
//! - **No echo**: the terminal is switched to raw, echo-disabled mode for
//!   the duration of a capture and unconditionally restored afterwards
//! - **Constant-time comparison**: candidate secrets are compared without
//!   data-dependent branching, so timing never reveals where two secrets
//!   first differ
//!
//! This is not a password hashing library and not a credential store; it
//! only owns the secret while it is being typed, held, and compared.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use secureinput::{capture_password, PasswordState};
//!
//! fn main() -> secureinput::Result<()> {
//!     let mut state = PasswordState::with_default_capacity()?;
//!
//!     let length = capture_password(&mut state, "Enter password: ")?;
//!     println!("captured {} bytes", length);
//!
//!     // Buffers are wiped and released when `state` is dropped.
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Operations that can fail return [`Result`]. End-of-input or a read error
//! in the middle of a capture is not an error: whatever was typed so far is
//! kept and the capture reports the partial length, which keeps piped and
//! redirected input working.

/// Locked buffer ownership
pub mod buffer;

/// Password capture protocol
pub mod capture;

/// Constant-time comparison
pub mod compare;

/// Error types
pub mod error;

/// Password state lifecycle
pub mod state;

/// Terminal raw-mode control
pub mod terminal;

// Re-export key types
pub use crate::buffer::LockedBuffer;
pub use crate::capture::capture_password;
pub use crate::compare::{compare_bytes, compare_strings, ConstantTimeCompare};
pub use crate::error::{Result, SecureInputError};
pub use crate::state::{PasswordState, DEFAULT_CAPACITY};
pub use crate::terminal::{RawModeGuard, TerminalState};
