use crate::buffer::LockedBuffer;
use crate::error::{Result, SecureInputError};
use log::debug;
use std::fmt;

/// Default buffer capacity for a password state, in bytes.
///
/// Sixty-three content bytes plus the terminating sentinel.
pub const DEFAULT_CAPACITY: usize = 64;

/// One secret-holding session.
///
/// A `PasswordState` owns four independently locked buffers of equal
/// capacity, so a caller can hold a newly captured entry, a previous entry,
/// and a working copy at the same time (enter/confirm and rotation flows)
/// without allocating mid-flow:
///
/// - `active` — the buffer a capture writes into
/// - `current` — the entry the caller considers live
/// - `previous` — the entry being rotated away from
/// - `scratch` — working space for transformations
///
/// Every buffer is pinned against swap and zero-initialized for its whole
/// lifetime; dropping the state wipes and releases all of them. The state is
/// always owned by exactly one caller and is never shared.
pub struct PasswordState {
    current: LockedBuffer,
    previous: LockedBuffer,
    active: LockedBuffer,
    scratch: LockedBuffer,
    capacity: usize,
    length: usize,
}

impl PasswordState {
    /// Creates a state with four locked buffers of `capacity` bytes each.
    ///
    /// `capacity` must be at least 2: one content byte plus the terminating
    /// sentinel. If any allocation fails, the buffers acquired before it are
    /// wiped and released before the error propagates; there is no partial
    /// state.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 2 {
            return Err(SecureInputError::InvalidCapacity(capacity));
        }

        // Earlier buffers are dropped (wiped + released) automatically if a
        // later allocation fails.
        let current = LockedBuffer::new(capacity)?;
        let previous = LockedBuffer::new(capacity)?;
        let active = LockedBuffer::new(capacity)?;
        let scratch = LockedBuffer::new(capacity)?;

        debug!("password state initialized with capacity {}", capacity);
        Ok(Self {
            current,
            previous,
            active,
            scratch,
            capacity,
            length: 0,
        })
    }

    /// Creates a state with [`DEFAULT_CAPACITY`] byte buffers.
    pub fn with_default_capacity() -> Result<Self> {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Fixed buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of meaningful bytes currently stored in the active buffer.
    ///
    /// Always strictly less than [`capacity`](Self::capacity); the byte at
    /// `active()[length()]` is the zero sentinel.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The buffer a capture writes into.
    pub fn active(&self) -> &LockedBuffer {
        &self.active
    }

    /// Mutable access to the capture buffer.
    pub fn active_mut(&mut self) -> &mut LockedBuffer {
        &mut self.active
    }

    /// The entry the caller considers live.
    pub fn current(&self) -> &LockedBuffer {
        &self.current
    }

    /// Mutable access to the live entry.
    pub fn current_mut(&mut self) -> &mut LockedBuffer {
        &mut self.current
    }

    /// The entry being rotated away from.
    pub fn previous(&self) -> &LockedBuffer {
        &self.previous
    }

    /// Mutable access to the rotated-away entry.
    pub fn previous_mut(&mut self) -> &mut LockedBuffer {
        &mut self.previous
    }

    /// Working space for transformations.
    pub fn scratch(&self) -> &LockedBuffer {
        &self.scratch
    }

    /// Mutable access to the working space.
    pub fn scratch_mut(&mut self) -> &mut LockedBuffer {
        &mut self.scratch
    }

    /// Rotates a freshly captured entry into place: `current` moves to
    /// `previous`, `active` moves to `current`, and `active` is wiped ready
    /// for the next capture.
    ///
    /// Secret bytes move only between locked buffers; nothing is staged
    /// through unlocked memory.
    pub fn promote_active(&mut self) {
        self.previous
            .as_mut_slice()
            .copy_from_slice(self.current.as_slice());
        self.current
            .as_mut_slice()
            .copy_from_slice(self.active.as_slice());
        self.active.wipe();
        self.length = 0;
    }

    /// Recomputes `length` as the number of bytes in the active buffer
    /// before the first zero sentinel.
    pub(crate) fn recompute_length(&mut self) {
        let bytes = self.active.as_slice();
        self.length = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    }

    /// Wipes all four buffers and resets the stored length to zero.
    ///
    /// The buffers stay allocated and locked, ready for reuse.
    pub fn clear(&mut self) {
        self.current.wipe();
        self.previous.wipe();
        self.active.wipe();
        self.scratch.wipe();
        self.length = 0;
        debug!("password state cleared");
    }
}

// Releasing the buffers (each wipes itself on drop) is the whole teardown;
// the descriptor fields die with the value.
//
// Never expose buffer content or the captured length through formatting.
impl fmt::Debug for PasswordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordState")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
