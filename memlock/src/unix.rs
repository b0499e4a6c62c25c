use crate::error::MemlockError;
use crate::types::RlimitResource;
use log::debug;
use once_cell::sync::Lazy;
use std::ptr;

static PAGE_SIZE: Lazy<usize> = Lazy::new(page_size::get);

#[inline]
fn as_mut_ptr(memory: &mut [u8]) -> *mut libc::c_void {
    memory.as_mut_ptr().cast::<libc::c_void>()
}

#[inline]
fn as_len(memory: &[u8]) -> libc::size_t {
    memory.len() as libc::size_t
}

/// Allocates a new locked memory region of the given size.
///
/// The region comes from an anonymous private mapping so it never aliases
/// heap allocations, is pinned with `mlock` so the kernel cannot write it to
/// swap, and is zero-filled before being handed to the caller. If the pin
/// fails after the mapping succeeded, the mapping is released before the
/// error is reported.
pub fn alloc(size: usize) -> Result<&'static mut [u8], MemlockError> {
    if size == 0 {
        return Err(MemlockError::InvalidArgument(
            "<memlock> cannot allocate a zero-sized region".to_string(),
        ));
    }

    let ptr = unsafe {
        libc::mmap(
            ptr::null_mut(),
            size,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_PRIVATE | libc::MAP_ANON,
            -1,
            0,
        )
    };

    if ptr == libc::MAP_FAILED {
        return Err(MemlockError::SystemError(format!(
            "<memlock> could not allocate [Err: {}]",
            std::io::Error::last_os_error()
        )));
    }

    let memory = unsafe { std::slice::from_raw_parts_mut(ptr.cast::<u8>(), size) };

    // Keep the region out of core dumps where the kernel supports it.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::madvise(as_mut_ptr(memory), as_len(memory), libc::MADV_DONTDUMP);
    }

    // Pin the region; on failure release the mapping so no unpinned region
    // leaks back to the caller.
    let result = unsafe { libc::mlock(as_mut_ptr(memory), as_len(memory)) };
    if result != 0 {
        let err = std::io::Error::last_os_error();
        unsafe {
            libc::munmap(as_mut_ptr(memory), as_len(memory));
        }
        return Err(MemlockError::SystemError(format!(
            "<memlock> could not acquire lock on {:p}, limit reached? [Err: {}]",
            memory.as_ptr(),
            err
        )));
    }

    // Wipe it just in case there is some remnant data.
    for byte in memory.iter_mut() {
        *byte = 0;
    }

    debug!("<memlock> allocated locked region of {} bytes", size);
    Ok(memory)
}

/// Releases a memory region previously allocated with `alloc`.
///
/// The region is wiped first, then unpinned and unmapped. The unmap always
/// runs even if the unpin fails; the first failure encountered is the one
/// reported.
pub fn free(ptr: &mut [u8]) -> Result<(), MemlockError> {
    if ptr.is_empty() {
        return Ok(());
    }

    // Wipe before the pages go back to the kernel.
    crate::wipe(ptr);

    let unlock_result = unsafe { libc::munlock(as_mut_ptr(ptr), as_len(ptr)) };

    let unmap_result = unsafe { libc::munmap(as_mut_ptr(ptr), as_len(ptr)) };

    if unlock_result != 0 {
        return Err(MemlockError::SystemError(format!(
            "<memlock> could not free lock on {:p} [Err: {}]",
            ptr.as_ptr(),
            std::io::Error::last_os_error()
        )));
    }

    if unmap_result != 0 {
        return Err(MemlockError::SystemError(format!(
            "<memlock> could not deallocate {:p} [Err: {}]",
            ptr.as_ptr(),
            std::io::Error::last_os_error()
        )));
    }

    debug!("<memlock> released locked region of {} bytes", ptr.len());
    Ok(())
}

/// Returns the system's page size.
pub fn page_size() -> usize {
    *PAGE_SIZE
}

/// Disables creation of core dump files for the current process.
pub fn disable_core_dumps() -> Result<(), MemlockError> {
    set_limit(RlimitResource::Core, 0)
}

/// Sets a resource limit for the current process.
pub fn set_limit(resource: RlimitResource, value: u64) -> Result<(), MemlockError> {
    let resource_id = match resource {
        RlimitResource::Core => libc::RLIMIT_CORE,
        RlimitResource::Data => libc::RLIMIT_DATA,
        RlimitResource::MemLock => libc::RLIMIT_MEMLOCK,
        RlimitResource::NoFile => libc::RLIMIT_NOFILE,
        RlimitResource::Stack => libc::RLIMIT_STACK,
    };

    let rlimit = libc::rlimit {
        rlim_cur: value,
        rlim_max: value,
    };

    let result = unsafe { libc::setrlimit(resource_id, &rlimit) };

    if result != 0 {
        return Err(MemlockError::SystemError(format!(
            "<memlock> could not set rlimit [Err: {}]",
            std::io::Error::last_os_error()
        )));
    }

    Ok(())
}
