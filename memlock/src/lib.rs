//! # memlock
//!
//! Cross-platform wrapper for locked-memory system calls.
//!
//! This library provides a platform-independent interface for holding
//! short-lived secrets in memory the operating system will never page out:
//! - Allocation of pinned, zero-initialized memory regions
//! - Guaranteed wipe-before-release on deallocation
//! - Optimizer-proof zeroing of arbitrary byte regions
//! - Process hardening helpers (core dump suppression, resource limits)
//!
//! The implementation uses the appropriate system calls for each supported
//! platform. Allocation is all-or-nothing: if the memory can be mapped but
//! not pinned, the mapping is released before the error is reported, so a
//! caller never ends up holding an unpinned region by accident.

mod error;
mod types;

#[cfg(target_os = "linux")]
pub(crate) mod unix;
#[cfg(target_os = "linux")]
use unix as platform;

#[cfg(target_os = "macos")]
pub(crate) mod unix;
#[cfg(target_os = "macos")]
use unix as platform;

use zeroize::Zeroize;

// Error type
pub use error::MemlockError;
// Types
pub use types::RlimitResource;

// Platform-agnostic API

/// Allocates a new locked memory region of the given size.
///
/// The region is mapped anonymously, pinned against swap, and zero-filled
/// before it is returned. On a partial failure (mapped but not pinned) the
/// mapping is unmapped before the error propagates.
pub fn alloc(size: usize) -> Result<&'static mut [u8], MemlockError> {
    platform::alloc(size)
}

/// Releases a memory region previously allocated with `alloc`.
///
/// The region is wiped, unpinned, and unmapped, in that order. Releasing an
/// empty region is a no-op.
pub fn free(ptr: &mut [u8]) -> Result<(), MemlockError> {
    platform::free(ptr)
}

/// Overwrites every byte of `region` with zero.
///
/// The writes cannot be elided by the optimizer, even when the region is
/// about to be discarded.
pub fn wipe(region: &mut [u8]) {
    region.zeroize();
}

/// Portable twin of [`wipe`] built on volatile stores.
///
/// Same contract as `wipe`; useful where the `zeroize` barrier strategy is
/// unavailable or under scrutiny. Both implementations are covered by the
/// same conformance tests.
pub fn wipe_volatile(region: &mut [u8]) {
    for byte in region.iter_mut() {
        // Volatile store: the compiler must treat the write as observable.
        unsafe { std::ptr::write_volatile(byte, 0) };
    }
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}

/// Returns the system's page size.
pub fn page_size() -> usize {
    platform::page_size()
}

/// Disables creation of core dump files for the current process.
pub fn disable_core_dumps() -> Result<(), MemlockError> {
    platform::disable_core_dumps()
}

/// Sets a resource limit for the current process.
pub fn set_limit(resource: RlimitResource, value: u64) -> Result<(), MemlockError> {
    platform::set_limit(resource, value)
}
