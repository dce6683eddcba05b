//! Heuristic tuning knobs.
//!
//! Mirrors the deployment knobs of the surrounding service: how much slack
//! the vendor/product guesser allows over its best match, how many
//! candidates a guessing level may emit, and how deep the level walk may
//! go. Values come from `CVESEARCH_*` environment variables with hard-coded
//! defaults; unparsable values are logged and defaulted.

use std::str::FromStr;

use tracing::warn;

const DEFAULT_VENDOR_THRESHOLD: u32 = 1;
const DEFAULT_PRODUCT_THRESHOLD: u32 = 0;
const DEFAULT_CUTOFF: usize = 6;
const DEFAULT_MAX_DEPTH: usize = 0;

/// Tuning knobs for [`crate::Heuristic`] and its guessing levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicConfig {
    /// Vendor matches within this distance of the best one survive.
    pub vendor_threshold: u32,
    /// Product matches within this distance of the best one survive.
    pub product_threshold: u32,
    /// Maximum number of `vendor:product` candidates per guessing level.
    pub cutoff: usize,
    /// Maximum number of search levels to evaluate; 0 means no bound.
    pub max_depth: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            vendor_threshold: DEFAULT_VENDOR_THRESHOLD,
            product_threshold: DEFAULT_PRODUCT_THRESHOLD,
            cutoff: DEFAULT_CUTOFF,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HeuristicConfig {
    /// Configuration from `CVESEARCH_*` environment variables, falling back
    /// to the defaults for unset or unparsable values.
    pub fn from_env() -> Self {
        Self {
            vendor_threshold: env_or("CVESEARCH_VENDOR_THRESHOLD", DEFAULT_VENDOR_THRESHOLD),
            product_threshold: env_or("CVESEARCH_PRODUCT_THRESHOLD", DEFAULT_PRODUCT_THRESHOLD),
            cutoff: env_or("CVESEARCH_CUTOFF", DEFAULT_CUTOFF),
            max_depth: env_or("CVESEARCH_MAX_DEPTH", DEFAULT_MAX_DEPTH),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = raw.as_str(), "unparsable value, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HeuristicConfig::default();
        assert_eq!(config.vendor_threshold, 1);
        assert_eq!(config.product_threshold, 0);
        assert_eq!(config.cutoff, 6);
        assert_eq!(config.max_depth, 0);
    }

    #[test]
    fn test_parse_or_accepts_valid_value() {
        assert_eq!(parse_or("CVESEARCH_CUTOFF", Some("3".to_owned()), 6usize), 3);
    }

    #[test]
    fn test_parse_or_defaults_on_garbage() {
        assert_eq!(
            parse_or("CVESEARCH_CUTOFF", Some("many".to_owned()), 6usize),
            6
        );
    }

    #[test]
    fn test_parse_or_defaults_when_unset() {
        assert_eq!(parse_or("CVESEARCH_CUTOFF", None, 6usize), 6);
    }
}
