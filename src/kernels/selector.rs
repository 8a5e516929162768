//! This module contains the per-block parameter selector.
//!
//! Given the mapped values of one block it decides how that block is written:
//! not at all (every value zero), verbatim at a fixed width (escape), or Rice
//! coded with a parameter `k`. The Rice parameter starts from a logarithmic
//! estimate of the block mean and is refined by a local search over its
//! neighbours using the exact bit cost.

use crate::codec::format::{CODED_HEADER_BITS, ZERO_HEADER_BITS};
use crate::config::{RiceConfig, RICE_PARAM_LIMIT};

//==================================================================================
// 1. Block Coding Choice
//==================================================================================

/// How a single block is laid out in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCoding {
    /// Every mapped value is zero; only the header bit is written.
    Zero,
    /// Every mapped value is stored verbatim in `width` bits (1..=32).
    Escape { width: u32 },
    /// Low `k` bits verbatim, the rest in unary.
    Rice { k: u32 },
}

impl BlockCoding {
    /// Exact number of bits this coding spends on `values`, header included.
    pub fn encoded_bits(&self, values: &[u32]) -> u64 {
        match *self {
            BlockCoding::Zero => ZERO_HEADER_BITS,
            BlockCoding::Escape { width } => CODED_HEADER_BITS + values.len() as u64 * u64::from(width),
            BlockCoding::Rice { k } => CODED_HEADER_BITS + rice_cost(values, k),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockCoding::Zero => "zero",
            BlockCoding::Escape { .. } => "escape",
            BlockCoding::Rice { .. } => "rice",
        }
    }
}

//==================================================================================
// 2. Cost Model
//==================================================================================

/// Payload bits of Rice coding `values` with parameter `k`:
/// `count * (k + 1) + sum(v >> k)`.
pub fn rice_cost(values: &[u32], k: u32) -> u64 {
    values
        .iter()
        .map(|&v| u64::from(k) + 1 + u64::from(v >> k))
        .sum()
}

/// Bits needed to hold `max` verbatim.
pub fn fixed_width(max: u32) -> u32 {
    u32::BITS - max.leading_zeros()
}

/// Smallest `k` with `count * 2^k >= sum`, i.e. `ceil(log2(mean))`, capped at `k_max`.
pub fn estimate_rice_param(sum: u64, count: usize, k_max: u32) -> u32 {
    let count = count as u128;
    let sum = u128::from(sum);
    let mut k = 0;
    while k < k_max && (count << k) < sum {
        k += 1;
    }
    k
}

/// Searches `{k0 - 1, k0, k0 + 1}` around the estimate for the cheapest Rice
/// parameter. Ties go to the smaller `k`. Returns `(k, payload_bits)`.
pub fn best_rice_param(values: &[u32], sum: u64, k_max: u32) -> (u32, u64) {
    let k0 = estimate_rice_param(sum, values.len(), k_max);
    let mut best = (k0, rice_cost(values, k0));
    for k in k0.saturating_sub(1)..=(k0 + 1).min(k_max) {
        let cost = rice_cost(values, k);
        if cost < best.1 || (cost == best.1 && k < best.0) {
            best = (k, cost);
        }
    }
    best
}

//==================================================================================
// 3. Selector
//==================================================================================

/// Chooses the coding for one block of mapped values.
///
/// Escape is taken when the best Rice parameter would leave some value with a
/// unary run longer than `config.max_unary_run`, or when verbatim storage is
/// strictly smaller. The second rule caps every block at
/// `header + count * width` bits.
pub fn select(values: &[u32], config: &RiceConfig) -> BlockCoding {
    let (sum, max) = values
        .iter()
        .fold((0u64, 0u32), |(sum, max), &v| (sum + u64::from(v), max.max(v)));
    if max == 0 {
        return BlockCoding::Zero;
    }

    let k_max = u32::from(config.max_rice_param.min(RICE_PARAM_LIMIT));
    let (k, rice_bits) = best_rice_param(values, sum, k_max);

    let width = fixed_width(max);
    let escape_bits = values.len() as u64 * u64::from(width);

    if (max >> k) > config.max_unary_run || escape_bits < rice_bits {
        BlockCoding::Escape { width }
    } else {
        BlockCoding::Rice { k }
    }
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [u32; 16] = [0, 1, 2, 3, 1, 0, 2, 5, 1, 0, 0, 3, 1, 2, 0, 9];

    #[test]
    fn test_all_zero_block_is_zero_coding() {
        let config = RiceConfig::default();
        assert_eq!(select(&[0; 32], &config), BlockCoding::Zero);
        assert_eq!(select(&[], &config), BlockCoding::Zero);
        assert_eq!(BlockCoding::Zero.encoded_bits(&[0; 32]), 1);
    }

    #[test]
    fn test_estimate_is_ceil_log2_of_mean() {
        assert_eq!(estimate_rice_param(0, 16, 30), 0);
        assert_eq!(estimate_rice_param(16, 16, 30), 0); // mean 1
        assert_eq!(estimate_rice_param(30, 16, 30), 1); // mean 1.875
        assert_eq!(estimate_rice_param(33, 16, 30), 2); // mean 2.06
        assert_eq!(estimate_rice_param(u64::MAX, 1, 5), 5);
    }

    #[test]
    fn test_local_search_prefers_cheapest_then_smallest_k() {
        // Constant 8: k = 2, 3, 4 all cost 5 bits per value.
        let values = [8u32; 16];
        assert_eq!(best_rice_param(&values, 128, 30), (2, 80));

        // sum 30 over 16 values: k0 = 1, cost(0) = 46, cost(1) = 43, cost(2) = 51.
        assert_eq!(best_rice_param(&MIXED, 30, 30), (1, 43));
    }

    #[test]
    fn test_rice_block_selected_when_cheapest() {
        let coding = select(&MIXED, &RiceConfig::default());
        assert_eq!(coding, BlockCoding::Rice { k: 1 });
        assert_eq!(coding.encoded_bits(&MIXED), 7 + 43);
    }

    #[test]
    fn test_escape_when_verbatim_is_cheaper() {
        // Rice costs 80 bits, four bits per value costs 64.
        let coding = select(&[8u32; 16], &RiceConfig::default());
        assert_eq!(coding, BlockCoding::Escape { width: 4 });
    }

    #[test]
    fn test_escape_when_unary_run_too_long() {
        let config = RiceConfig {
            max_unary_run: 3,
            ..RiceConfig::default()
        };
        // With k = 1 the value 9 would need a unary run of 4.
        assert_eq!(select(&MIXED, &config), BlockCoding::Escape { width: 4 });
    }

    #[test]
    fn test_single_outlier_forces_full_width_escape() {
        let mut values = [0u32; 32];
        values[31] = 4_000_000_000;
        // Best Rice parameter is 26, leaving a unary run of 59 for the outlier.
        assert_eq!(best_rice_param(&values, 4_000_000_000, 30).0, 26);
        assert_eq!(
            select(&values, &RiceConfig::default()),
            BlockCoding::Escape { width: 32 }
        );
    }

    #[test]
    fn test_rice_param_capped_by_config() {
        let config = RiceConfig {
            max_rice_param: 2,
            max_unary_run: u32::MAX,
            ..RiceConfig::default()
        };
        let values = [1000u32, 1001, 999, 1002, 998, 1000, 1003, 997];
        // Capped at k = 2 the block is far more expensive than 10-bit verbatim.
        assert_eq!(select(&values, &config), BlockCoding::Escape { width: 10 });
        assert_eq!(best_rice_param(&values, values.iter().map(|&v| u64::from(v)).sum(), 2).0, 2);
    }
}
