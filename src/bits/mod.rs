//! Scalar bit-scan over 64-bit words.
//!
//! [`find_first_set`] and [`find_last_set`] locate the lowest and highest set
//! bit of a `u64` in O(1). The implementation is selected once per target
//! build:
//!
//! - x86_64: `bsf` / `bsr` bit-scan instructions
//! - aarch64: `rbit` + `clz` / `clz`
//! - everything else: `trailing_zeros` / `leading_zeros` compiler intrinsics
//!
//! # Bit Numbering
//!
//! Positions are always reported as a distance from the least-significant bit
//! (bit 0 = LSB), whatever the hardware's native numbering convention. Each
//! strategy normalizes its raw result before returning, so callers never
//! observe which strategy is active.
//!
//! # Zero Input
//!
//! A zero word has no set bit to report; both operations return `None`. This
//! is part of the contract, not a failure.

#[cfg(target_arch = "aarch64")]
mod aarch64;
mod portable;
#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
pub use aarch64::Arm64Scan;
pub use portable::PortableScan;
#[cfg(target_arch = "x86_64")]
pub use x86_64::X86Scan;

/// A bit-scan strategy over a single `u64` word.
///
/// Implementations must be branch-cheap — one hardware scan instruction or
/// one compiler intrinsic per call, never a per-bit loop — and must report
/// positions relative to the least-significant bit.
pub trait WordScan {
    /// Position of the least-significant set bit, or `None` if `word == 0`.
    fn find_first_set(word: u64) -> Option<u32>;

    /// Position of the most-significant set bit, or `None` if `word == 0`.
    fn find_last_set(word: u64) -> Option<u32>;
}

/// The strategy selected for the current build target.
///
/// Use this type alias (or the free functions below) for portable code.
#[cfg(target_arch = "x86_64")]
pub type ArchScan = x86_64::X86Scan;

/// The strategy selected for the current build target.
///
/// Use this type alias (or the free functions below) for portable code.
#[cfg(target_arch = "aarch64")]
pub type ArchScan = aarch64::Arm64Scan;

/// The strategy selected for the current build target.
///
/// Use this type alias (or the free functions below) for portable code.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub type ArchScan = portable::PortableScan;

/// Position of the least-significant set bit of `word`.
///
/// Returns `None` if `word == 0`.
///
/// # Examples
/// ```
/// use bitscan::bits::find_first_set;
///
/// assert_eq!(find_first_set(0b1010), Some(1));
/// assert_eq!(find_first_set(1u64 << 63), Some(63));
/// assert_eq!(find_first_set(0), None);
/// ```
#[inline]
pub fn find_first_set(word: u64) -> Option<u32> {
    let result = ArchScan::find_first_set(word);
    debug_assert!(result.is_some() == (word != 0));
    result
}

/// Position of the most-significant set bit of `word`.
///
/// Returns `None` if `word == 0`.
///
/// # Examples
/// ```
/// use bitscan::bits::find_last_set;
///
/// assert_eq!(find_last_set(0b1010), Some(3));
/// assert_eq!(find_last_set(1), Some(0));
/// assert_eq!(find_last_set(0), None);
/// ```
#[inline]
pub fn find_last_set(word: u64) -> Option<u32> {
    let result = ArchScan::find_last_set(word);
    debug_assert!(result.is_some() == (word != 0));
    result
}

#[cfg(test)]
mod tests {
    use super::{ArchScan, PortableScan, WordScan, find_first_set, find_last_set};

    // Exercises one strategy against the documented contract.
    fn check_strategy<S: WordScan>() {
        assert_eq!(S::find_first_set(0), None);
        assert_eq!(S::find_last_set(0), None);

        for bit in 0..64u32 {
            let word = 1u64 << bit;
            assert_eq!(S::find_first_set(word), Some(bit));
            assert_eq!(S::find_last_set(word), Some(bit));
        }

        assert_eq!(S::find_first_set(u64::MAX), Some(0));
        assert_eq!(S::find_last_set(u64::MAX), Some(63));

        // Two set bits: first and last differ.
        let word = (1u64 << 3) | (1u64 << 59);
        assert_eq!(S::find_first_set(word), Some(3));
        assert_eq!(S::find_last_set(word), Some(59));
    }

    #[test]
    fn arch_strategy_contract() {
        check_strategy::<ArchScan>();
    }

    #[test]
    fn portable_strategy_contract() {
        check_strategy::<PortableScan>();
    }

    #[test]
    fn zero_word_has_no_position() {
        assert_eq!(find_first_set(0), None);
        assert_eq!(find_last_set(0), None);
    }

    #[test]
    fn single_bit_words_agree() {
        for bit in 0..64u32 {
            let word = 1u64 << bit;
            assert_eq!(find_first_set(word), find_last_set(word));
        }
    }
}
