//! This module contains the running-reference differencing kernels.
//!
//! Each block is coded as the differences between consecutive samples, where
//! the first difference of a block is taken against the last sample of the
//! previous block (or the stream's reference value for the first block).
//! Differences are folded through the zigzag map so the block coder only ever
//! sees non-negative values, widened to `u32`.

use crate::config::OverflowPolicy;
use crate::error::RiceError;
use crate::kernels::zigzag;
use crate::traits::Sample;

//==================================================================================
// 1. Encode Side
//==================================================================================

/// Maps one block of samples to zigzag-coded deltas, writing them into `mapped`.
///
/// `first_index` is the position of `block[0]` in the whole input and is used
/// only for error reporting. Returns the new running reference: the last
/// sample of the block.
pub fn map_block<T: Sample>(
    block: &[T],
    reference: T,
    policy: OverflowPolicy,
    first_index: usize,
    mapped: &mut Vec<u32>,
) -> Result<T, RiceError> {
    mapped.clear();
    let mut last = reference;
    for (offset, &value) in block.iter().enumerate() {
        let delta = match policy {
            OverflowPolicy::Wrap => value.wrapping_sub(&last),
            OverflowPolicy::Reject => value.checked_sub(&last).ok_or_else(|| {
                let (wide, last_wide): (i64, i64) = (value.into(), last.into());
                RiceError::ValueOutOfRange {
                    index: first_index + offset,
                    delta: wide - last_wide,
                }
            })?,
        };
        mapped.push(zigzag::encode_val(delta).into());
        last = value;
    }
    Ok(last)
}

//==================================================================================
// 2. Decode Side
//==================================================================================

/// Rebuilds one sample from its mapped delta and the running reference.
///
/// Fails with `CorruptStream` if the mapped value is wider than the sample
/// type allows, which a stream produced for this type never contains.
#[inline]
pub fn unmap_value<T: Sample>(mapped: u32, reference: T) -> Result<T, RiceError> {
    let narrow: T::Unsigned = num_traits::cast(mapped).ok_or_else(|| {
        RiceError::CorruptStream(format!(
            "mapped value {} does not fit a {}-bit sample",
            mapped,
            T::BITS
        ))
    })?;
    let delta: T = zigzag::decode_val(narrow);
    Ok(reference.wrapping_add(&delta))
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_block_uses_running_reference() {
        let mut mapped = Vec::new();
        let next = map_block(&[10i32, 12, 9], 10, OverflowPolicy::Wrap, 0, &mut mapped).unwrap();
        assert_eq!(next, 9);
        assert_eq!(mapped, vec![0, 4, 5]); // deltas 0, +2, -3

        let next = map_block(&[9i32, 9], next, OverflowPolicy::Wrap, 3, &mut mapped).unwrap();
        assert_eq!(next, 9);
        assert_eq!(mapped, vec![0, 0]);
    }

    #[test]
    fn test_wrap_policy_handles_full_range_jump() {
        let mut mapped = Vec::new();
        map_block(&[i32::MAX, i32::MIN], i32::MAX, OverflowPolicy::Wrap, 0, &mut mapped).unwrap();
        // i32::MIN - i32::MAX wraps to +1.
        assert_eq!(mapped, vec![0, 2]);

        let restored = unmap_value::<i32>(mapped[1], i32::MAX).unwrap();
        assert_eq!(restored, i32::MIN);
    }

    #[test]
    fn test_reject_policy_reports_index_and_true_delta() {
        let mut mapped = Vec::new();
        let err = map_block(&[0i16, i16::MAX, i16::MIN], 0, OverflowPolicy::Reject, 100, &mut mapped)
            .unwrap_err();
        match err {
            RiceError::ValueOutOfRange { index, delta } => {
                assert_eq!(index, 102);
                assert_eq!(delta, i16::MIN as i64 - i16::MAX as i64);
            }
            other => panic!("Expected ValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_unmap_value_rejects_oversized_mapped_value() {
        assert_eq!(unmap_value::<i8>(255, 0).unwrap(), i8::MIN);
        let err = unmap_value::<i8>(256, 0).unwrap_err();
        assert!(matches!(err, RiceError::CorruptStream(_)));
    }
}
