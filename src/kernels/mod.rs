//! This module collects the pure, stateless kernels the codec is built from.
//!
//! Kernels know nothing about stream layout beyond what they are handed: the
//! `codec` layer decides what to write, the kernels decide how.

/// Bit Packer and Bit Unpacker over caller-owned buffers.
pub mod bitpack;

/// Running-reference differencing of one block.
pub mod delta;

/// Per-block coding choice: zero, escape or Rice(k).
pub mod selector;

/// Signed <-> unsigned bijection.
pub mod zigzag;
