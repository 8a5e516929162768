// In: src/codec/decoder.rs

//! The decompression side of the codec.
//!
//! The decoder mirrors the encoder bit for bit. It needs the exact compressed
//! length (the slice length), the sample count (the output slice length) and
//! the block size the stream was written with. A block size different from the
//! encoder's cannot be detected from the stream; it is a caller precondition.

use crate::codec::format::{field_to_width, PARAM_BITS, REFERENCE_BITS};
use crate::error::RiceError;
use crate::kernels::bitpack::BitUnpacker;
use crate::kernels::delta::unmap_value;
use crate::traits::Sample;

/// Block-adaptive Rice decoder. Stateless; every parameter travels in the
/// stream or in the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiceDecoder;

impl RiceDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Reconstructs `out.len()` samples from `input` and returns that count.
    ///
    /// # Errors
    /// * `InvalidArgument` if `out` is empty or `block_size` is zero.
    /// * `StreamTruncated` if `input` ends before every sample is recovered.
    /// * `CorruptStream` if the stream holds values the type `T` cannot represent.
    pub fn decompress<T: Sample>(
        &self,
        input: &[u8],
        block_size: usize,
        out: &mut [T],
    ) -> Result<usize, RiceError> {
        if block_size == 0 {
            return Err(RiceError::InvalidArgument(
                "block size must be at least 1".to_string(),
            ));
        }
        if out.is_empty() {
            return Err(RiceError::InvalidArgument(
                "sample count must be at least 1".to_string(),
            ));
        }

        let mut unpacker = BitUnpacker::new(input);

        let raw_reference = unpacker.read(REFERENCE_BITS)? as i32;
        let mut reference: T = num_traits::cast(raw_reference).ok_or_else(|| {
            RiceError::CorruptStream(format!(
                "reference value {} does not fit a {}-bit sample",
                raw_reference,
                T::BITS
            ))
        })?;

        for block in out.chunks_mut(block_size) {
            reference = decode_block(&mut unpacker, block, reference)?;
        }

        let used = unpacker.bytes_consumed();
        if used < input.len() {
            log::warn!(
                "decompression left {} unused bytes at end of compressed stream",
                input.len() - used
            );
        }
        log::debug!(
            "decompressed {} {} samples (block size {}) from {} bytes",
            out.len(),
            T::TYPE_NAME,
            block_size,
            used
        );
        Ok(out.len())
    }
}

/// Decodes one block into `block` and returns the new running reference.
fn decode_block<T: Sample>(
    unpacker: &mut BitUnpacker<'_>,
    block: &mut [T],
    mut reference: T,
) -> Result<T, RiceError> {
    if unpacker.read(1)? == 1 {
        // Every delta is zero.
        block.fill(reference);
        return Ok(reference);
    }

    let escape = unpacker.read(1)? == 1;
    let field = unpacker.read(PARAM_BITS)?;

    if escape {
        let width = field_to_width(field);
        if width > T::BITS {
            return Err(RiceError::CorruptStream(format!(
                "escape width {} exceeds the {}-bit sample width",
                width,
                T::BITS
            )));
        }
        for slot in block.iter_mut() {
            let mapped = unpacker.read(width)?;
            reference = unmap_value(mapped, reference)?;
            *slot = reference;
        }
    } else {
        let k = field;
        for slot in block.iter_mut() {
            let low = unpacker.read(k)?;
            let high = unpacker.read_unary()?;
            if high > (u32::MAX >> k) as usize {
                return Err(RiceError::CorruptStream(format!(
                    "unary run of {} overflows a 32-bit value at k = {}",
                    high, k
                )));
            }
            let mapped = ((high as u32) << k) | low;
            reference = unmap_value(mapped, reference)?;
            *slot = reference;
        }
    }
    Ok(reference)
}
