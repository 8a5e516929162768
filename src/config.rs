// In: src/config.rs

//! The single source of truth for the encoder's tuning knobs.
//!
//! `RiceConfig` only influences the choices the encoder makes. Every choice is
//! recorded in the stream itself, so the decoder never needs a config and can
//! read any stream produced under any valid configuration. The block size is
//! deliberately NOT part of the config: it is a per-call argument that the
//! caller must repeat identically at decode time.

use serde::{Deserialize, Serialize};

use crate::error::RiceError;

//==================================================================================
// I. Constants
//==================================================================================

/// Largest Rice parameter the 5-bit header field can carry.
pub const RICE_PARAM_LIMIT: u8 = 31;

/// Default upper bound on the Rice parameter.
pub const DEFAULT_MAX_RICE_PARAM: u8 = 30;

/// Default longest unary run tolerated before a block is forced into escape.
pub const DEFAULT_MAX_UNARY_RUN: u32 = 32;

//==================================================================================
// II. Configuration Enums & Structs
//==================================================================================

/// How the encoder treats a delta that does not fit the sample width.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// **Default:** deltas wrap around in two's complement. Every input is
    /// codable and the decoder's wrapping addition restores it exactly.
    #[default]
    Wrap,

    /// Deltas are computed with checked arithmetic; a delta outside the sample
    /// range aborts the encode with `RiceError::ValueOutOfRange`.
    Reject,
}

/// Encoder configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RiceConfig {
    /// Upper bound for the per-block Rice parameter `k`. At most 31.
    #[serde(default = "default_max_rice_param")]
    pub max_rice_param: u8,

    /// If the chosen `k` would leave any value in a block with a unary
    /// remainder longer than this, the block is stored verbatim instead.
    #[serde(default = "default_max_unary_run")]
    pub max_unary_run: u32,

    #[serde(default)]
    pub overflow_policy: OverflowPolicy,
}

impl Default for RiceConfig {
    fn default() -> Self {
        Self {
            max_rice_param: default_max_rice_param(),
            max_unary_run: default_max_unary_run(),
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

impl RiceConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RiceError> {
        let config: RiceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RiceError> {
        if self.max_rice_param > RICE_PARAM_LIMIT {
            return Err(RiceError::InvalidArgument(format!(
                "max_rice_param must be at most {}, got {}",
                RICE_PARAM_LIMIT, self.max_rice_param
            )));
        }
        Ok(())
    }
}

fn default_max_rice_param() -> u8 {
    DEFAULT_MAX_RICE_PARAM
}

fn default_max_unary_run() -> u32 {
    DEFAULT_MAX_UNARY_RUN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = RiceConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RiceConfig::default());
        assert_eq!(config.max_rice_param, 30);
        assert_eq!(config.max_unary_run, 32);
        assert_eq!(config.overflow_policy, OverflowPolicy::Wrap);
    }

    #[test]
    fn test_json_overrides() {
        let config = RiceConfig::from_json_str(
            r#"{"max_unary_run": 8, "overflow_policy": "reject"}"#,
        )
        .unwrap();
        assert_eq!(config.max_unary_run, 8);
        assert_eq!(config.overflow_policy, OverflowPolicy::Reject);
        assert_eq!(config.max_rice_param, DEFAULT_MAX_RICE_PARAM);
    }

    #[test]
    fn test_rice_param_beyond_header_field_is_rejected() {
        let result = RiceConfig::from_json_str(r#"{"max_rice_param": 32}"#);
        assert!(matches!(result, Err(RiceError::InvalidArgument(_))));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = RiceConfig::from_json_str(r#"{"max_unary_run": "lots"}"#);
        assert!(matches!(result, Err(RiceError::Config(_))));
    }
}
