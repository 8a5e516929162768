//! This module contains the bit-level writer and reader that every compressed
//! stream goes through.
//!
//! Both work over caller-owned byte buffers viewed as MSB-first bit slices
//! (`BitSlice<u8, Msb0>`): the first bit of the stream is the most significant
//! bit of byte 0. Every operation is bounds-checked against the buffer before
//! a single bit is touched, so neither side can ever write or read past the
//! capacity/length it was given.

use std::ops::Range;

use bitvec::prelude::*;

use crate::error::RiceError;

/// Widest code word `emit`/`read` accept in one call.
pub const MAX_WORD_BITS: u32 = 32;

//==================================================================================
// 1. Bit Packer
//==================================================================================

/// Appends variable-length code words to a fixed-capacity byte buffer.
pub struct BitPacker<'a> {
    bits: &'a mut BitSlice<u8, Msb0>,
    cursor: usize,
}

impl<'a> BitPacker<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            bits: buffer.view_bits_mut::<Msb0>(),
            cursor: 0,
        }
    }

    /// Number of bits written so far.
    pub fn bit_position(&self) -> usize {
        self.cursor
    }

    pub fn capacity_bits(&self) -> usize {
        self.bits.len()
    }

    /// Claims the next `nbits` bits, or fails without moving the cursor.
    fn claim(&self, nbits: usize) -> Result<Range<usize>, RiceError> {
        match self.cursor.checked_add(nbits) {
            Some(end) if end <= self.bits.len() => Ok(self.cursor..end),
            _ => Err(RiceError::BufferOverflow {
                needed_bits: self.cursor.saturating_add(nbits),
                capacity_bytes: self.bits.len() / 8,
            }),
        }
    }

    /// Appends the low `nbits` bits of `value`, most significant bit first.
    pub fn emit(&mut self, value: u32, nbits: u32) -> Result<(), RiceError> {
        if nbits > MAX_WORD_BITS {
            return Err(RiceError::InvalidArgument(format!(
                "cannot emit {} bits in one word (max {})",
                nbits, MAX_WORD_BITS
            )));
        }
        if nbits == 0 {
            return Ok(());
        }
        let span = self.claim(nbits as usize)?;
        // `store_be` keeps only the low `span.len()` bits of the value.
        self.bits[span].store_be::<u32>(value);
        self.cursor += nbits as usize;
        Ok(())
    }

    /// Appends `count` zero bits followed by a terminating one bit.
    pub fn emit_unary(&mut self, count: u32) -> Result<(), RiceError> {
        let span = self.claim(count as usize + 1)?;
        let stop = span.end - 1;
        self.bits[span.start..stop].fill(false);
        self.bits.set(stop, true);
        self.cursor = span.end;
        Ok(())
    }

    /// Zero-pads the final partial byte and returns the number of bytes used.
    pub fn flush(self) -> usize {
        let byte_len = self.cursor.div_ceil(8);
        // The capacity is a whole number of bytes, so the padding always fits.
        self.bits[self.cursor..byte_len * 8].fill(false);
        byte_len
    }
}

//==================================================================================
// 2. Bit Unpacker
//==================================================================================

/// Reads code words back from a byte buffer of known, exact length.
pub struct BitUnpacker<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    cursor: usize,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            bits: input.view_bits::<Msb0>(),
            cursor: 0,
        }
    }

    /// Number of bits consumed so far.
    pub fn bit_position(&self) -> usize {
        self.cursor
    }

    pub fn remaining_bits(&self) -> usize {
        self.bits.len() - self.cursor
    }

    /// Number of input bytes touched so far, counting a partial final byte.
    pub fn bytes_consumed(&self) -> usize {
        self.cursor.div_ceil(8)
    }

    fn truncated(&self, nbits: usize) -> RiceError {
        RiceError::StreamTruncated {
            needed_bits: self.cursor.saturating_add(nbits),
            available_bits: self.bits.len(),
        }
    }

    /// Returns the next `nbits` bits as an unsigned integer, MSB first.
    pub fn read(&mut self, nbits: u32) -> Result<u32, RiceError> {
        if nbits > MAX_WORD_BITS {
            return Err(RiceError::InvalidArgument(format!(
                "cannot read {} bits in one word (max {})",
                nbits, MAX_WORD_BITS
            )));
        }
        if nbits == 0 {
            return Ok(0);
        }
        let nbits = nbits as usize;
        if nbits > self.remaining_bits() {
            return Err(self.truncated(nbits));
        }
        let value = self.bits[self.cursor..self.cursor + nbits].load_be::<u32>();
        self.cursor += nbits;
        Ok(value)
    }

    /// Consumes zero bits up to and including the next one bit and returns
    /// the number of zeros.
    pub fn read_unary(&mut self) -> Result<usize, RiceError> {
        match self.bits[self.cursor..].first_one() {
            Some(zeros) => {
                self.cursor += zeros + 1;
                Ok(zeros)
            }
            None => Err(self.truncated(self.remaining_bits() + 1)),
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
