// In: src/codec/dispatch.rs

//! Byte-buffer entry points keyed by a sample type.
//!
//! Hosts that carry tiles as raw native-endian bytes plus a type descriptor
//! (the way image containers record their pixel type) go through here instead
//! of the generic API. The stream format is identical to the typed API.

use serde::{Deserialize, Serialize};

use crate::codec::decoder::RiceDecoder;
use crate::codec::encoder::RiceEncoder;
use crate::error::RiceError;
use crate::traits::Sample;
use crate::utils::{safe_bytes_to_typed_vec, typed_slice_to_bytes};

/// The sample widths the codec supports.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    Int8,
    Int16,
    Int32,
}

impl SampleType {
    /// Parses a type descriptor such as `"Int32"`.
    pub fn from_type_str(type_str: &str) -> Result<Self, RiceError> {
        match type_str {
            "Int8" => Ok(SampleType::Int8),
            "Int16" => Ok(SampleType::Int16),
            "Int32" => Ok(SampleType::Int32),
            _ => Err(RiceError::UnsupportedType(type_str.to_string())),
        }
    }

    /// Size of one sample in bytes.
    pub fn element_size(&self) -> usize {
        match self {
            SampleType::Int8 => 1,
            SampleType::Int16 => 2,
            SampleType::Int32 => 4,
        }
    }
}

/// Compresses a native-endian byte buffer of `sample_type` samples into `out`.
pub fn dispatch_compress(
    encoder: &RiceEncoder,
    input_bytes: &[u8],
    sample_type: SampleType,
    block_size: usize,
    out: &mut [u8],
) -> Result<usize, RiceError> {
    match sample_type {
        SampleType::Int8 => encoder.compress(&safe_bytes_to_typed_vec::<i8>(input_bytes)?, block_size, out),
        SampleType::Int16 => encoder.compress(&safe_bytes_to_typed_vec::<i16>(input_bytes)?, block_size, out),
        SampleType::Int32 => encoder.compress(&safe_bytes_to_typed_vec::<i32>(input_bytes)?, block_size, out),
    }
}

/// Decompresses `num_values` samples of `sample_type` and replaces the contents
/// of `output_buf` with their native-endian bytes.
pub fn dispatch_decompress(
    decoder: &RiceDecoder,
    input: &[u8],
    sample_type: SampleType,
    block_size: usize,
    num_values: usize,
    output_buf: &mut Vec<u8>,
) -> Result<(), RiceError> {
    output_buf.clear();
    match sample_type {
        SampleType::Int8 => decompress_into::<i8>(decoder, input, block_size, num_values, output_buf),
        SampleType::Int16 => decompress_into::<i16>(decoder, input, block_size, num_values, output_buf),
        SampleType::Int32 => decompress_into::<i32>(decoder, input, block_size, num_values, output_buf),
    }
}

fn decompress_into<T: Sample>(
    decoder: &RiceDecoder,
    input: &[u8],
    block_size: usize,
    num_values: usize,
    output_buf: &mut Vec<u8>,
) -> Result<(), RiceError> {
    let mut samples = vec![T::zero(); num_values];
    decoder.decompress(input, block_size, &mut samples)?;
    output_buf.extend_from_slice(&typed_slice_to_bytes(&samples));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::format::max_compressed_len;

    #[test]
    fn test_type_str_parsing() {
        assert_eq!(SampleType::from_type_str("Int8").unwrap(), SampleType::Int8);
        assert_eq!(SampleType::from_type_str("Int16").unwrap(), SampleType::Int16);
        assert_eq!(SampleType::from_type_str("Int32").unwrap().element_size(), 4);
        assert!(matches!(
            SampleType::from_type_str("Float32"),
            Err(RiceError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_dispatch_roundtrip_i16() {
        let original: Vec<i16> = vec![-300, -290, -301, -250, 12, 13, 13, 13, 0, i16::MIN, i16::MAX];
        let original_bytes = typed_slice_to_bytes(&original);

        let mut compressed = vec![0u8; max_compressed_len::<i16>(original.len(), 4)];
        let len = dispatch_compress(
            &RiceEncoder::new(),
            &original_bytes,
            SampleType::Int16,
            4,
            &mut compressed,
        )
        .unwrap();

        let mut decompressed = Vec::new();
        dispatch_decompress(
            &RiceDecoder::new(),
            &compressed[..len],
            SampleType::Int16,
            4,
            original.len(),
            &mut decompressed,
        )
        .unwrap();
        assert_eq!(decompressed, original_bytes);
    }

    #[test]
    fn test_dispatch_matches_typed_api() {
        let original: Vec<i32> = (0..100).map(|i| (i * i) % 37 - 18).collect();
        let mut typed = vec![0u8; 1024];
        let typed_len = RiceEncoder::new().compress(&original, 16, &mut typed).unwrap();

        let mut dispatched = vec![0u8; 1024];
        let dispatched_len = dispatch_compress(
            &RiceEncoder::new(),
            &typed_slice_to_bytes(&original),
            SampleType::Int32,
            16,
            &mut dispatched,
        )
        .unwrap();
        assert_eq!(typed[..typed_len], dispatched[..dispatched_len]);
    }

    #[test]
    fn test_dispatch_rejects_ragged_byte_buffer() {
        let mut out = vec![0u8; 64];
        let result = dispatch_compress(&RiceEncoder::new(), &[1, 2, 3], SampleType::Int16, 8, &mut out);
        assert!(matches!(result, Err(RiceError::BufferMismatch(2, 3))));
    }
}
