//! This file is the root of the `ricecomp` Rust crate: a lossless,
//! block-adaptive Golomb-Rice codec for streams of signed integer samples
//! such as image tiles or their pixel deltas.
//!
//! Its responsibilities are strictly limited to declaring the top-level
//! modules and re-exporting the public API.
//!
//! # Example
//! ```
//! use ricecomp::{compress, decompress, max_compressed_len};
//!
//! let tile: Vec<i32> = (0..256).map(|i| 1000 + (i % 7) - 3).collect();
//!
//! let mut compressed = vec![0u8; max_compressed_len::<i32>(tile.len(), 32)];
//! let len = compress(&tile, 32, &mut compressed).unwrap();
//!
//! let mut restored = vec![0i32; tile.len()];
//! decompress(&compressed[..len], 32, &mut restored).unwrap();
//! assert_eq!(tile, restored);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod codec;
pub mod config;
pub mod error;
pub mod kernels;
pub mod traits;
pub mod utils;

//==================================================================================
// 2. Public API
//==================================================================================
pub use codec::{
    compress, compress_with_stats, decompress, dispatch_compress, dispatch_decompress,
    max_compressed_len, EncodeStats, RiceDecoder, RiceEncoder, SampleType,
};
pub use config::{OverflowPolicy, RiceConfig};
pub use error::RiceError;
pub use kernels::selector::BlockCoding;
pub use observability::enable_verbose_logging;
pub use traits::Sample;
