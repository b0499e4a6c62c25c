use crate::error::Result;
use log::warn;
use std::fmt;

/// Exclusive owner of one locked memory region.
///
/// A `LockedBuffer` is backed by pinned, zero-initialized memory from
/// `memlock` for its entire lifetime. Dropping the buffer wipes the region
/// and releases it; because release is tied to ownership, a double release
/// cannot be expressed.
pub struct LockedBuffer {
    region: Option<&'static mut [u8]>,
}

impl LockedBuffer {
    /// Allocates a new locked buffer of `size` zero bytes.
    ///
    /// If the region can be mapped but not pinned, `memlock` releases the
    /// mapping before the error reaches us, so a failed construction leaves
    /// nothing behind.
    pub fn new(size: usize) -> Result<Self> {
        let region = memlock::alloc(size)?;
        Ok(Self {
            region: Some(region),
        })
    }

    /// Length of the owned region in bytes.
    pub fn len(&self) -> usize {
        self.region.as_deref().map_or(0, <[u8]>::len)
    }

    /// True if the buffer owns no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read access to the owned bytes.
    pub fn as_slice(&self) -> &[u8] {
        self.region.as_deref().unwrap_or(&[])
    }

    /// Write access to the owned bytes.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.region.as_deref_mut().unwrap_or(&mut [])
    }

    /// Overwrites every byte with zero, without releasing the region.
    pub fn wipe(&mut self) {
        if let Some(region) = self.region.as_deref_mut() {
            memlock::wipe(region);
        }
    }
}

impl Drop for LockedBuffer {
    fn drop(&mut self) {
        if let Some(region) = self.region.take() {
            // memlock::free wipes before unpinning and unmapping.
            if let Err(e) = memlock::free(region) {
                warn!("failed to release locked buffer: {}", e);
            }
        }
    }
}

// Never expose buffer content through formatting.
impl fmt::Debug for LockedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
