// In: src/codec/format.rs

//! Bit-exact layout of a compressed stream.
//!
//! ```text
//! reference   : 32 bits, two's complement, first sample (sign-extended)
//! per block   : 1 bit   zero flag        (1 = every delta is zero, block ends)
//!               1 bit   escape flag
//!               5 bits  parameter        (escape: width, 0 meaning 32; rice: k)
//!               payload escape: `width` bits per sample
//!                       rice:   `k` low bits, then `v >> k` zeros and a one
//! ```
//!
//! All fields are MSB first. The stream ends at the first byte boundary after
//! the last block; the padding bits are zero. Neither the sample count nor the
//! block size is stored: both are supplied by the caller at decode time.

use crate::traits::Sample;

/// Width of the verbatim reference value.
pub const REFERENCE_BITS: u32 = 32;

/// Width of the zero-block and escape flags.
pub const FLAG_BITS: u32 = 1;

/// Width of the Rice parameter / escape width field.
pub const PARAM_BITS: u32 = 5;

/// Header bits of an all-zero block.
pub const ZERO_HEADER_BITS: u64 = FLAG_BITS as u64;

/// Header bits of an escape or Rice block.
pub const CODED_HEADER_BITS: u64 = (2 * FLAG_BITS + PARAM_BITS) as u64;

/// Encodes an escape width (1..=32) into the 5-bit parameter field.
#[inline]
pub fn width_to_field(width: u32) -> u32 {
    width & ((1 << PARAM_BITS) - 1)
}

/// Decodes the 5-bit parameter field of an escape block back into a width.
#[inline]
pub fn field_to_width(field: u32) -> u32 {
    if field == 0 {
        32
    } else {
        field
    }
}

/// An output capacity that is always sufficient to compress `n` samples of
/// type `T` with the given block size.
///
/// Every block is capped at its header plus `T::BITS` bits per sample, because
/// the selector falls back to verbatim storage whenever Rice coding would cost
/// more than that.
pub fn max_compressed_len<T: Sample>(n: usize, block_size: usize) -> usize {
    let blocks = if block_size == 0 { 0 } else { n.div_ceil(block_size) };
    let bits = REFERENCE_BITS as usize
        + blocks * CODED_HEADER_BITS as usize
        + n * T::BITS as usize;
    bits.div_ceil(8)
}
