//! This module provides a set of shared, low-level utility functions used
//! by the byte-buffer entry points and the tests.
//!
//! Its primary responsibility is providing safe, validated conversions between
//! raw byte slices and typed sample slices, in native byte order.

use crate::error::RiceError;

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Copies a byte slice into an owned, properly aligned vector of `T`.
///
/// A zero-copy cast is not used because caller-supplied byte buffers carry no
/// alignment guarantee for wider types.
///
/// # Errors
/// Returns a `RiceError::BufferMismatch` if the byte slice length is not
/// perfectly divisible by the size of the target type `T`.
pub fn safe_bytes_to_typed_vec<T>(bytes: &[u8]) -> Result<Vec<T>, RiceError>
where
    T: bytemuck::Pod,
{
    let type_size = std::mem::size_of::<T>();
    if bytes.len() % type_size != 0 {
        return Err(RiceError::BufferMismatch(type_size, bytes.len()));
    }
    Ok(bytes
        .chunks_exact(type_size)
        .map(bytemuck::pod_read_unaligned::<T>)
        .collect())
}

/// Converts a slice of primitive integers into a `Vec<u8>` in native byte order.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}
