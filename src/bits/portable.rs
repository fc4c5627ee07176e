//! Portable bit-scan strategy.
//!
//! `trailing_zeros` and `leading_zeros` lower to single instructions (or a
//! short branchless sequence) on every LLVM target, so the O(1) contract
//! holds without inline assembly. This strategy serves unlisted
//! architectures and doubles as the reference the native strategies are
//! tested against.

use super::WordScan;

/// Bit scan via the `trailing_zeros`/`leading_zeros` intrinsics.
pub struct PortableScan;

impl WordScan for PortableScan {
    #[inline]
    fn find_first_set(word: u64) -> Option<u32> {
        if word == 0 {
            return None;
        }
        Some(word.trailing_zeros())
    }

    #[inline]
    fn find_last_set(word: u64) -> Option<u32> {
        if word == 0 {
            return None;
        }
        Some(63 - word.leading_zeros())
    }
}
