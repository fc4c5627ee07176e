//! AArch64 bit-scan strategy.
//!
//! The ISA only counts from the most-significant end (`clz`), so find-first
//! reverses the word with `rbit` before counting, and find-last subtracts the
//! leading-zero count from 63. Both restore the LSB-relative position
//! contract before returning.

use super::WordScan;
use core::arch::asm;

/// Bit scan via the `rbit` and `clz` instructions.
pub struct Arm64Scan;

impl WordScan for Arm64Scan {
    #[inline]
    fn find_first_set(word: u64) -> Option<u32> {
        if word == 0 {
            return None;
        }
        let ctz: u64;
        // SAFETY: register-only bit reverse and count; no memory access and
        // no condition flags touched.
        unsafe {
            asm!(
                "rbit {rev}, {word}",
                "clz {ctz}, {rev}",
                word = in(reg) word,
                rev = out(reg) _,
                ctz = out(reg) ctz,
                options(pure, nomem, nostack),
            );
        }
        debug_assert!(ctz < 64);
        Some(ctz as u32)
    }

    #[inline]
    fn find_last_set(word: u64) -> Option<u32> {
        if word == 0 {
            return None;
        }
        let lz: u64;
        // SAFETY: register-only count; no memory access and no condition
        // flags touched.
        unsafe {
            asm!(
                "clz {lz}, {word}",
                word = in(reg) word,
                lz = out(reg) lz,
                options(pure, nomem, nostack),
            );
        }
        debug_assert!(lz < 64);
        Some(63 - lz as u32)
    }
}
