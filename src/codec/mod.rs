// In: src/codec/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Layer
// ====================================================================================
//
// The codec layer orchestrates the pure kernels into complete streams.
//
// Data Flow (Compression):
//
//   samples ──> [delta::map_block] ──> mapped block ──> [selector::select]
//                                                            |
//                                                       BlockCoding
//                                                            |
//                                              [encoder::write_block] ──> BitPacker ──> caller's buffer
//
// Data Flow (Decompression):
//
//   caller's bytes ──> BitUnpacker ──> [decoder::decode_block] ──> [delta::unmap_value] ──> samples
//
// Neither side keeps state between calls: every call owns its cursor, and the
// caller owns every buffer.
// ====================================================================================
pub mod decoder;
pub mod dispatch;
pub mod encoder;
pub mod format;

pub use decoder::RiceDecoder;
pub use dispatch::{dispatch_compress, dispatch_decompress, SampleType};
pub use encoder::{EncodeStats, RiceEncoder};
pub use format::max_compressed_len;

use crate::error::RiceError;
use crate::traits::Sample;

/// Compresses `samples` into `out` with the default configuration and returns
/// the exact compressed length.
pub fn compress<T: Sample>(samples: &[T], block_size: usize, out: &mut [u8]) -> Result<usize, RiceError> {
    RiceEncoder::new().compress(samples, block_size, out)
}

/// Like [`compress`], also reporting how each block was coded.
pub fn compress_with_stats<T: Sample>(
    samples: &[T],
    block_size: usize,
    out: &mut [u8],
) -> Result<EncodeStats, RiceError> {
    RiceEncoder::new().compress_with_stats(samples, block_size, out)
}

/// Reconstructs exactly `out.len()` samples from `input`, which must be the
/// complete compressed stream. `block_size` must equal the one used to compress.
pub fn decompress<T: Sample>(input: &[u8], block_size: usize, out: &mut [T]) -> Result<usize, RiceError> {
    RiceDecoder::new().decompress(input, block_size, out)
}
