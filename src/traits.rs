//! This module defines shared traits used across different kernels.

use std::fmt::Debug;

use bytemuck::Pod;
use num_traits::{PrimInt, Signed, Unsigned, WrappingAdd, WrappingSub};

/// A trait that maps a signed integer type to its unsigned counterpart.
///
/// The unsigned type is where zigzag-mapped values live. It always widens
/// losslessly into `u32`, the working type of the bit packer.
pub trait HasUnsigned {
    type Unsigned: PrimInt + Unsigned + Pod + Into<u32> + Debug;
}

/// A signed integer type the codec can compress.
///
/// Implemented for `i8`, `i16` and `i32`. The stream layout is shared by all
/// three; only the range of legal mapped values differs.
pub trait Sample:
    PrimInt + Signed + WrappingAdd + WrappingSub + HasUnsigned + Pod + Into<i64> + Debug
{
    /// Width of the sample in bits.
    const BITS: u32;
    /// Type descriptor used by the byte-buffer dispatcher and in log output.
    const TYPE_NAME: &'static str;
}

// Implement the traits for all supported primitive integer types.
macro_rules! impl_sample {
    ($S:ty, $U:ty, $name:literal) => {
        impl HasUnsigned for $S {
            type Unsigned = $U;
        }
        impl Sample for $S {
            const BITS: u32 = <$S>::BITS;
            const TYPE_NAME: &'static str = $name;
        }
    };
}

impl_sample!(i8, u8, "Int8");
impl_sample!(i16, u16, "Int16");
impl_sample!(i32, u32, "Int32");
