use memlock::{alloc, disable_core_dumps, free, set_limit, wipe, wipe_volatile, RlimitResource};

#[test]
fn test_cycle() {
    let buffer = alloc(32).expect("Failed to allocate memory");

    // Check buffer size matches what was requested
    assert_eq!(buffer.len(), 32, "allocation has invalid size");

    // Verify memory is zeroed
    for &byte in buffer.iter() {
        assert_eq!(byte, 0, "allocated memory not zeroed");
    }

    // Modify and check the buffer
    for byte in buffer.iter_mut() {
        *byte = 1;
        assert_eq!(*byte, 1, "read back data different to what was written");
    }

    free(buffer).expect("Failed to free memory");
}

#[test]
fn test_alloc_zero_size_rejected() {
    let result = alloc(0);
    assert!(result.is_err(), "zero-sized allocation should fail");
}

#[test]
fn test_alloc_is_zeroed_for_varied_sizes() {
    for size in [1, 7, 64, 4096, 4097] {
        let buffer = alloc(size).expect("Failed to allocate memory");
        assert_eq!(buffer.len(), size);
        assert!(
            buffer.iter().all(|&b| b == 0),
            "allocation of {} bytes not zeroed",
            size
        );
        free(buffer).expect("Failed to free memory");
    }
}

// Shared conformance check for both wipe implementations: prior content must
// be unobservable afterwards, no matter what it was.
fn wipe_conformance(wipe_fn: fn(&mut [u8])) {
    let mut region = [0u8; 64];
    for (i, byte) in region.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(37).wrapping_add(1);
    }
    wipe_fn(&mut region);
    assert!(region.iter().all(|&b| b == 0), "wipe left residual bytes");

    // Wiping an already-clean region is harmless.
    wipe_fn(&mut region);
    assert!(region.iter().all(|&b| b == 0));

    // Empty region is a no-op.
    wipe_fn(&mut []);
}

#[test]
fn test_wipe() {
    wipe_conformance(wipe);
}

#[test]
fn test_wipe_volatile() {
    wipe_conformance(wipe_volatile);
}

#[test]
fn test_wipe_locked_region() {
    let buffer = alloc(64).expect("Failed to allocate memory");
    buffer.fill(0xAA);
    wipe(buffer);
    assert!(buffer.iter().all(|&b| b == 0), "locked region not wiped");
    free(buffer).expect("Failed to free memory");
}

#[test]
fn test_free_empty_region_is_noop() {
    free(&mut []).expect("freeing an empty region should succeed");
}

#[test]
fn test_page_size() {
    let size = memlock::page_size();
    assert!(size > 0, "Page size should be greater than zero");
    assert!(size.is_power_of_two(), "Page size should be a power of 2");
}

#[test]
fn test_disable_core_dumps() {
    disable_core_dumps().expect("Failed to disable core dumps");
}

#[test]
fn test_set_limit() {
    set_limit(RlimitResource::Core, 0).expect("Failed to set core limit");
}
