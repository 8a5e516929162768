//! This module contains the pure, stateless kernels for performing Zig-zag
//! encoding and decoding.
//!
//! Zig-zag is a lossless, bitwise mapping of signed integers to unsigned
//! integers of the same width: 0, -1, 1, -2, 2, ... become 0, 1, 2, 3, 4, ...
//! It is computed with shifts and xor in the sample's own width, so it is total
//! and bijective over the whole range, `MIN` and `MAX` included. Nothing here
//! can overflow or panic.

use num_traits::One;

use crate::traits::Sample;

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Encodes a single signed integer using the Zig-zag algorithm.
#[inline]
pub fn encode_val<T: Sample>(n: T) -> T::Unsigned {
    let bits = T::BITS as usize;
    // The formula (n << 1) ^ (n >> (BITS - 1)) relies on an arithmetic right shift.
    let shifted = (n << 1) ^ (n >> (bits - 1));
    bytemuck::cast(shifted)
}

/// Decodes a single unsigned integer back to its signed representation.
#[inline]
pub fn decode_val<T: Sample>(n: T::Unsigned) -> T {
    let magnitude: T = bytemuck::cast(n >> 1);
    let sign: T = bytemuck::cast(n & T::Unsigned::one());
    // The formula is (n >> 1) ^ -(n & 1)
    magnitude ^ (T::zero() - sign)
}

//==================================================================================
// 2. Public API (32-bit convenience pair)
//==================================================================================

/// Maps a signed 32-bit value onto the non-negative integers.
pub fn map_signed(value: i32) -> u32 {
    encode_val(value)
}

/// Inverse of [`map_signed`].
pub fn unmap(mapped: u32) -> i32 {
    decode_val::<i32>(mapped)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
