use subtle::ConstantTimeEq;

/// A comparison whose work and memory-access pattern depend only on the
/// length of the inputs, never on their content or on where they first
/// differ.
///
/// Two conformant implementations exist and are interchangeable at call
/// time: [`SubtleComparator`] (the default, built on the `subtle` crate) and
/// [`FoldComparator`] (a portable OR-of-XOR accumulator). Both are run
/// against the same conformance suite.
pub trait ConstantTimeCompare {
    /// Returns true iff `a` and `b` are byte-for-byte equal.
    ///
    /// A length mismatch returns false immediately; length is not treated
    /// as secret, since it is already observable through other channels.
    /// For equal lengths, every byte pair is visited.
    fn bytes_eq(a: &[u8], b: &[u8]) -> bool;
}

/// Comparator backed by `subtle::ConstantTimeEq`.
pub struct SubtleComparator;

impl ConstantTimeCompare for SubtleComparator {
    fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        a.ct_eq(b).into()
    }
}

/// Portable comparator: the bitwise difference of every byte pair is folded
/// into one accumulator, and only the final accumulator is branched on.
pub struct FoldComparator;

impl ConstantTimeCompare for FoldComparator {
    fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
        if a.len() != b.len() {
            return false;
        }
        let mut acc = 0u8;
        for (x, y) in a.iter().zip(b.iter()) {
            acc |= x ^ y;
        }
        acc == 0
    }
}

/// Compares the first `length` bytes of `a` and `b` in constant time.
///
/// # Panics
///
/// Panics if `length` exceeds either slice.
pub fn compare_bytes(a: &[u8], b: &[u8], length: usize) -> bool {
    SubtleComparator::bytes_eq(&a[..length], &b[..length])
}

/// Compares two strings in constant time over their content.
///
/// A length mismatch is rejected immediately — deliberately not in constant
/// time, since string length leaks through other channels anyway. Matching
/// lengths delegate to the constant-time byte comparison.
pub fn compare_strings(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    SubtleComparator::bytes_eq(a.as_bytes(), b.as_bytes())
}
