// In: src/codec/encoder.rs

//! The compression side of the codec.
//!
//! The encoder owns nothing but its configuration. Each call builds its own
//! bit packer over the caller's buffer, walks the input block by block, and
//! either returns the exact compressed length or the first error it hits.

use crate::codec::format::{width_to_field, PARAM_BITS, REFERENCE_BITS};
use crate::config::RiceConfig;
use crate::error::RiceError;
use crate::kernels::bitpack::BitPacker;
use crate::kernels::delta;
use crate::kernels::selector::{self, BlockCoding};
use crate::traits::Sample;

/// Per-call summary of how the input was coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Bytes written to the output buffer.
    pub compressed_len: usize,
    pub zero_blocks: usize,
    pub escape_blocks: usize,
    pub rice_blocks: usize,
}

impl EncodeStats {
    fn record(&mut self, coding: BlockCoding) {
        match coding {
            BlockCoding::Zero => self.zero_blocks += 1,
            BlockCoding::Escape { .. } => self.escape_blocks += 1,
            BlockCoding::Rice { .. } => self.rice_blocks += 1,
        }
    }

    pub fn total_blocks(&self) -> usize {
        self.zero_blocks + self.escape_blocks + self.rice_blocks
    }
}

/// Block-adaptive Rice encoder.
#[derive(Debug, Clone, Default)]
pub struct RiceEncoder {
    config: RiceConfig,
}

impl RiceEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an encoder with a custom configuration, validating it first.
    pub fn with_config(config: RiceConfig) -> Result<Self, RiceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RiceConfig {
        &self.config
    }

    /// Compresses `samples` into `out` and returns the compressed length.
    ///
    /// # Errors
    /// * `InvalidArgument` if `samples` is empty or `block_size` is zero.
    /// * `BufferOverflow` if `out` is too small; see `max_compressed_len`.
    /// * `ValueOutOfRange` under `OverflowPolicy::Reject` only.
    pub fn compress<T: Sample>(
        &self,
        samples: &[T],
        block_size: usize,
        out: &mut [u8],
    ) -> Result<usize, RiceError> {
        self.compress_with_stats(samples, block_size, out)
            .map(|stats| stats.compressed_len)
    }

    /// Same as [`RiceEncoder::compress`], also reporting how many blocks took each form.
    pub fn compress_with_stats<T: Sample>(
        &self,
        samples: &[T],
        block_size: usize,
        out: &mut [u8],
    ) -> Result<EncodeStats, RiceError> {
        if block_size == 0 {
            return Err(RiceError::InvalidArgument(
                "block size must be at least 1".to_string(),
            ));
        }
        let Some(&first) = samples.first() else {
            return Err(RiceError::InvalidArgument(
                "cannot compress an empty sample sequence".to_string(),
            ));
        };

        let capacity = out.len();
        let mut packer = BitPacker::new(out);
        let mut stats = EncodeStats::default();

        // The reference is stored sign-extended so every sample width shares one layout.
        let first_wide: i64 = first.into();
        packer.emit(first_wide as u32, REFERENCE_BITS)?;

        let mut reference = first;
        let mut mapped = Vec::with_capacity(block_size.min(samples.len()));
        for (block_index, block) in samples.chunks(block_size).enumerate() {
            reference = delta::map_block(
                block,
                reference,
                self.config.overflow_policy,
                block_index * block_size,
                &mut mapped,
            )?;
            let coding = selector::select(&mapped, &self.config);
            write_block(&mut packer, coding, &mapped)?;
            stats.record(coding);

            log_metric!(
                "event" = "block_coded",
                "block" = block_index,
                "coding" = coding.label(),
                "param" = match coding {
                    BlockCoding::Zero => 0,
                    BlockCoding::Escape { width } => width,
                    BlockCoding::Rice { k } => k,
                },
                "bits" = coding.encoded_bits(&mapped),
            );
        }

        stats.compressed_len = packer.flush();
        log::debug!(
            "compressed {} {} samples (block size {}) into {} of {} bytes: {} zero, {} escape, {} rice blocks",
            samples.len(),
            T::TYPE_NAME,
            block_size,
            stats.compressed_len,
            capacity,
            stats.zero_blocks,
            stats.escape_blocks,
            stats.rice_blocks
        );
        Ok(stats)
    }
}

/// Writes one block's header and payload.
fn write_block(packer: &mut BitPacker<'_>, coding: BlockCoding, values: &[u32]) -> Result<(), RiceError> {
    match coding {
        BlockCoding::Zero => packer.emit(1, 1),
        BlockCoding::Escape { width } => {
            packer.emit(0b01, 2)?;
            packer.emit(width_to_field(width), PARAM_BITS)?;
            for &v in values {
                packer.emit(v, width)?;
            }
            Ok(())
        }
        BlockCoding::Rice { k } => {
            packer.emit(0b00, 2)?;
            packer.emit(k, PARAM_BITS)?;
            for &v in values {
                // `emit` keeps only the low `k` bits.
                packer.emit(v, k)?;
                packer.emit_unary(v >> k)?;
            }
            Ok(())
        }
    }
}
