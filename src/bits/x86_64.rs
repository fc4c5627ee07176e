//! x86_64 bit-scan strategy.
//!
//! `bsf` and `bsr` already number bits from the least-significant end, so no
//! position normalization is needed. Both instructions set ZF when the source
//! is zero and leave the destination undefined; `setne` captures that flag as
//! the found/not-found result.

use super::WordScan;
use core::arch::asm;

/// Bit scan via the `bsf`/`bsr` instructions.
pub struct X86Scan;

impl WordScan for X86Scan {
    #[inline]
    fn find_first_set(word: u64) -> Option<u32> {
        let pos: u64;
        let found: u8;
        // SAFETY: register-only bit scan; no memory access, flags are
        // consumed by `setne` within the block.
        unsafe {
            asm!(
                "bsf {pos}, {word}",
                "setne {found}",
                word = in(reg) word,
                pos = out(reg) pos,
                found = out(reg_byte) found,
                options(pure, nomem, nostack),
            );
        }
        if found != 0 { Some(pos as u32) } else { None }
    }

    #[inline]
    fn find_last_set(word: u64) -> Option<u32> {
        let pos: u64;
        let found: u8;
        // SAFETY: register-only bit scan; no memory access, flags are
        // consumed by `setne` within the block.
        unsafe {
            asm!(
                "bsr {pos}, {word}",
                "setne {found}",
                word = in(reg) word,
                pos = out(reg) pos,
                found = out(reg_byte) found,
                options(pure, nomem, nostack),
            );
        }
        if found != 0 { Some(pos as u32) } else { None }
    }
}
