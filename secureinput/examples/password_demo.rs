//! Interactive demonstration of capture, compare, and wipe.
//!
//! Run with a real terminal attached:
//!
//! ```sh
//! cargo run --example password_demo
//! ```

use secureinput::{capture_password, compare_bytes, PasswordState};

fn print_region(label: &str, bytes: &[u8]) {
    println!("{}:", label);
    for (i, byte) in bytes.iter().enumerate() {
        print!("{:02x} ", byte);
        if (i + 1) % 16 == 0 {
            println!();
        }
    }
    println!();
}

fn main() -> secureinput::Result<()> {
    // Harden the process before any secret exists. A denied rlimit is a
    // hardening problem, not an allocation failure; report it as such.
    if let Err(e) = memlock::disable_core_dumps() {
        eprintln!("warning: could not disable core dumps: {}", e);
    }

    let mut state = PasswordState::with_default_capacity()?;
    let capacity = state.capacity();

    print_region("Active buffer before input", state.active().as_slice());

    let length = capture_password(&mut state, "Enter password: ")?;
    println!("Captured {} bytes", length);
    print_region("Active buffer after input", state.active().as_slice());

    state.promote_active();

    let _ = capture_password(&mut state, "Confirm password: ")?;
    if compare_bytes(state.current().as_slice(), state.active().as_slice(), capacity) {
        println!("Passwords match");
    } else {
        println!("Passwords do not match");
    }

    state.clear();
    print_region("Active buffer after wiping", state.active().as_slice());

    Ok(())
}
