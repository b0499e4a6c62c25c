use crate::error::Result;
use crate::state::PasswordState;
use crate::terminal::{RawModeGuard, TerminalState};
use log::debug;
use std::io::{self, Read, Write};
use std::os::unix::io::RawFd;

/// Captures one line of secret input from the terminal into `state`.
///
/// The terminal is switched to raw, echo-disabled mode for the duration of
/// the call and restored to its pre-call configuration on every path,
/// including panics and early read errors. The prompt and a trailing
/// newline are written to standard output around the capture.
///
/// Reading stops at a newline or carriage return (consumed, not stored), at
/// `capacity - 1` stored bytes, or at end-of-input. End-of-input and read
/// errors mid-capture are a clean early termination: whatever was typed so
/// far is kept and its length returned. Only a failure to snapshot or
/// configure the terminal itself — the capture never started — or a failure
/// to restore it afterwards is an error.
///
/// On return, `state.length()` counts the stored bytes, every unused slot
/// through `capacity - 1` is zero, and the final byte is the zero sentinel
/// regardless of how reading stopped.
pub fn capture_password(state: &mut PasswordState, prompt: &str) -> Result<usize> {
    let mut terminal = TerminalState::save()?;
    let guard = RawModeGuard::new(&mut terminal)?;

    // Prompt emission is best-effort; a broken stdout must not abort the
    // capture or skip terminal restoration.
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(prompt.as_bytes());
        let _ = handle.flush();
    }

    // Secret bytes go straight from the kernel into the locked buffer. The
    // standard input handle is unusable here: it stages reads through an
    // unlocked, never-wiped heap buffer that would retain the secret.
    let mut input = FdReader {
        fd: libc::STDIN_FILENO,
    };
    read_secret_line(&mut input, state.active_mut().as_mut_slice());
    state.recompute_length();

    // Echo was off, so the user's Enter never reached the display.
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(b"\n");
        let _ = handle.flush();
    }

    guard.restore()?;
    debug!("password capture complete");
    Ok(state.length())
}

/// Unbuffered reader over a raw file descriptor.
///
/// Each `read` call is one `read(2)` against the descriptor for exactly the
/// requested length; no process-side staging buffer ever holds the bytes.
pub(crate) struct FdReader {
    pub(crate) fd: RawFd,
}

impl Read for FdReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = unsafe {
            libc::read(
                self.fd,
                buf.as_mut_ptr().cast::<libc::c_void>(),
                buf.len() as libc::size_t,
            )
        };
        if result < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(result as usize)
    }
}

/// Reads secret bytes one at a time from `reader` into `buffer` until a
/// newline/carriage return, a full buffer, or end-of-input.
///
/// Every slot from the end of the new content through `buffer.len() - 1` is
/// explicitly zeroed and the final byte forced to the sentinel, so stale
/// data from a previous occupant never survives past the logical length.
/// Returns the number of stored bytes.
pub(crate) fn read_secret_line<R: Read>(reader: &mut R, buffer: &mut [u8]) -> usize {
    let capacity = buffer.len();
    debug_assert!(capacity >= 2, "buffer must hold a byte plus the sentinel");

    let mut stored = 0;
    let mut byte = [0u8; 1];

    while stored < capacity - 1 {
        match reader.read(&mut byte) {
            Ok(1) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // End-of-input or read error: keep what was typed so far.
            _ => break,
        }
        if byte[0] == b'\n' || byte[0] == b'\r' {
            break;
        }
        buffer[stored] = byte[0];
        stored += 1;
    }

    // The last keystroke also passed through this stack byte.
    memlock::wipe(&mut byte);

    memlock::wipe(&mut buffer[stored..]);
    buffer[capacity - 1] = 0;

    stored
}
