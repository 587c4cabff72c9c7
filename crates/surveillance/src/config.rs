//! Surveillance configuration
//!
//! Defaults match the standard policy: a 60-second window and a 1:3
//! cancel-to-new ratio limit. A JSON file can override either through
//! [`CancellationConfig::from_file`].

use std::path::Path;

use argus_core::Quantity;
use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cancel-to-new ratio limit expressed as an exact rational
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioThreshold {
    /// Parts of cancelled volume
    pub cancelled: u32,
    /// Parts of newly placed volume
    pub placed: u32,
}

impl RatioThreshold {
    /// True when `cancelled_qty / placed_qty` strictly exceeds this ratio
    ///
    /// Evaluated by cross-multiplication, so a window holding cancelled
    /// volume but no placed volume always breaches, and a window holding
    /// neither never does. The verdicts are identical to dividing and
    /// comparing, without the division.
    pub fn breached(&self, cancelled_qty: Quantity, placed_qty: Quantity) -> bool {
        cancelled_qty * Decimal::from(self.placed) > placed_qty * Decimal::from(self.cancelled)
    }
}

impl Default for RatioThreshold {
    fn default() -> Self {
        Self {
            cancelled: 1,
            placed: 3,
        }
    }
}

/// Configuration for cancellation detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationConfig {
    /// Length of the sliding inspection window
    pub window: Duration,
    /// Ratio above which cancelled volume is excessive
    pub threshold: RatioThreshold,
}

impl Default for CancellationConfig {
    fn default() -> Self {
        Self {
            window: Duration::seconds(60),
            threshold: RatioThreshold::default(),
        }
    }
}

impl CancellationConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let dto: CancellationConfigDto =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        dto.to_domain()
    }
}

/// Configuration DTO for JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationConfigDto {
    /// Window length in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: i64,
    /// Ratio limit
    #[serde(default)]
    pub threshold: RatioThreshold,
}

fn default_window_secs() -> i64 {
    60
}

impl Default for CancellationConfigDto {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            threshold: RatioThreshold::default(),
        }
    }
}

impl CancellationConfigDto {
    pub fn to_domain(&self) -> Result<CancellationConfig, ConfigError> {
        if self.window_secs <= 0 {
            return Err(ConfigError::InvalidWindow(self.window_secs));
        }
        if self.threshold.placed == 0 {
            return Err(ConfigError::InvalidThreshold(
                "placed parts must be non-zero".to_string(),
            ));
        }
        Ok(CancellationConfig {
            window: Duration::seconds(self.window_secs),
            threshold: self.threshold,
        })
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("invalid window length: {0} seconds")]
    InvalidWindow(i64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_is_sixty_seconds_one_to_three() {
        let config = CancellationConfig::default();
        assert_eq!(config.window, Duration::seconds(60));
        assert_eq!(config.threshold.cancelled, 1);
        assert_eq!(config.threshold.placed, 3);
    }

    #[test]
    fn ratio_test_is_strict() {
        let threshold = RatioThreshold::default();
        // 30/90 is exactly one third
        assert!(!threshold.breached(dec!(30), dec!(90)));
        assert!(threshold.breached(dec!(30.01), dec!(90)));
    }

    #[test]
    fn all_cancel_volume_always_breaches() {
        let threshold = RatioThreshold::default();
        assert!(threshold.breached(dec!(0.0001), Decimal::ZERO));
        assert!(!threshold.breached(Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn parses_empty_config_as_defaults() {
        let config = CancellationConfig::from_json("{}").unwrap();
        assert_eq!(config, CancellationConfig::default());
    }

    #[test]
    fn parses_overrides() {
        let json = r#"{
            "window_secs": 30,
            "threshold": { "cancelled": 1, "placed": 2 }
        }"#;
        let config = CancellationConfig::from_json(json).unwrap();
        assert_eq!(config.window, Duration::seconds(30));
        assert_eq!(config.threshold.placed, 2);
    }

    #[test]
    fn rejects_zero_placed_parts() {
        let json = r#"{ "threshold": { "cancelled": 1, "placed": 0 } }"#;
        assert!(matches!(
            CancellationConfig::from_json(json),
            Err(ConfigError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn rejects_non_positive_window() {
        let json = r#"{ "window_secs": 0 }"#;
        assert!(matches!(
            CancellationConfig::from_json(json),
            Err(ConfigError::InvalidWindow(0))
        ));
    }
}
