use secureinput::{compare_bytes, compare_strings, LockedBuffer, PasswordState, DEFAULT_CAPACITY};

#[test]
fn test_locked_buffer_cycle() {
    let mut buffer = LockedBuffer::new(DEFAULT_CAPACITY).expect("Failed to allocate buffer");

    assert_eq!(buffer.len(), DEFAULT_CAPACITY);
    assert!(buffer.as_slice().iter().all(|&b| b == 0));

    buffer.as_mut_slice()[..7].copy_from_slice(b"hunter2");
    assert_eq!(&buffer.as_slice()[..7], b"hunter2");

    buffer.wipe();
    assert!(buffer.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_state_lifecycle() {
    let mut state = PasswordState::with_default_capacity().expect("Failed to initialize state");
    assert_eq!(state.capacity(), DEFAULT_CAPACITY);
    assert_eq!(state.length(), 0);

    state.active_mut().as_mut_slice()[..7].copy_from_slice(b"hunter2");
    state.clear();

    assert_eq!(state.length(), 0);
    assert!(state.active().as_slice().iter().all(|&b| b == 0));
}

// Enter/confirm flow: the first entry is promoted to `current`, the second
// lands in `active`, and the two are compared in constant time without the
// secret ever leaving locked memory.
#[test]
fn test_enter_confirm_flow() {
    let mut state = PasswordState::with_default_capacity().expect("Failed to initialize state");
    let capacity = state.capacity();

    state.active_mut().as_mut_slice()[..7].copy_from_slice(b"hunter2");
    state.promote_active();

    state.active_mut().as_mut_slice()[..7].copy_from_slice(b"hunter2");
    assert!(compare_bytes(
        state.current().as_slice(),
        state.active().as_slice(),
        capacity,
    ));

    // A confirmation typo is caught.
    state.active_mut().as_mut_slice()[6] = b'3';
    assert!(!compare_bytes(
        state.current().as_slice(),
        state.active().as_slice(),
        capacity,
    ));
}

#[test]
fn test_rotation_flow() {
    let mut state = PasswordState::new(16).expect("Failed to initialize state");

    state.active_mut().as_mut_slice()[..4].copy_from_slice(b"pssw");
    state.promote_active();
    state.active_mut().as_mut_slice()[..4].copy_from_slice(b"word");
    state.promote_active();

    assert_eq!(&state.previous().as_slice()[..4], b"pssw");
    assert_eq!(&state.current().as_slice()[..4], b"word");
    assert!(state.active().as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_compare_public_api() {
    assert!(compare_bytes(b"hunter2", b"hunter2", 7));
    assert!(!compare_bytes(b"hunter2", b"hunter3", 7));

    assert!(compare_strings("hunter2", "hunter2"));
    assert!(!compare_strings("hunter2", "hunter3"));
    assert!(!compare_strings("hunter2", "hunter23"));
}

#[test]
fn test_many_states_coexist() {
    // Locked regions are never shared between states.
    let mut states: Vec<PasswordState> = (0..4)
        .map(|_| PasswordState::new(32).expect("Failed to initialize state"))
        .collect();

    for (i, state) in states.iter_mut().enumerate() {
        state.active_mut().as_mut_slice()[0] = i as u8 + 1;
    }
    for (i, state) in states.iter().enumerate() {
        assert_eq!(state.active().as_slice()[0], i as u8 + 1);
    }
}
