// In: src/error.rs

//! This module defines the single, unified error type for the entire ricecomp library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every variant is terminal for the call that produced it: nothing is retried
//! internally, and any partially written output buffer must be discarded.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiceError {
    // =========================================================================
    // === Codec Errors (the bit packer, unpacker and block coder)
    // =========================================================================
    /// The encoder ran out of output capacity. Encode-time only.
    #[error("Output buffer overflow: {needed_bits} bits needed, capacity is {capacity_bytes} bytes")]
    BufferOverflow {
        needed_bits: usize,
        capacity_bytes: usize,
    },

    /// The decoder needed bits beyond the declared input length. Decode-time only.
    #[error("Compressed stream truncated: {needed_bits} bits needed, only {available_bits} available")]
    StreamTruncated {
        needed_bits: usize,
        available_bits: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A delta between adjacent samples does not fit the sample width.
    /// Only raised under `OverflowPolicy::Reject`.
    #[error("Sample {index} cannot be coded: delta {delta} overflows the sample width")]
    ValueOutOfRange { index: usize, delta: i64 },

    /// The stream parsed but describes values the requested sample type cannot hold.
    #[error("Corrupt compressed stream: {0}")]
    CorruptStream(String),

    // =========================================================================
    // === Dispatch & Configuration Errors
    // =========================================================================
    #[error("Unsupported data type for this operation: {0}")]
    UnsupportedType(String),

    #[error("Buffer length mismatch: expected a multiple of {0}, got {1}")]
    BufferMismatch(usize, usize),

    /// An error from the Serde JSON library, raised while parsing a `RiceConfig`.
    #[error("Serde JSON error: {0}")]
    Config(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (log file setup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
