//! Configuration system for lokey.
//!
//! All tunable parameters of the keyword pipeline live here: scoring
//! weights, selector caps and relaxation factors, per-city admission
//! thresholds, and trend cache sizing. The defaults are the calibration
//! values the pipeline was tuned with; a `lokey.toml` file can override any
//! subset of them. The numbers are hand-tuned calibration parameters, not
//! derived constants.

#![warn(missing_docs)]

mod error;
mod parse;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::ConfigError;
pub use parse::{RawConfig, parse_config_file, parse_config_str};

/// Weights for combining keyword sub-scores into a final score.
///
/// The final score is
/// `demand·w_demand + competition·w_competition + intent·w_intent +
/// region·w_region − risk·w_risk`, multiplied by `hot_trend_boost` when the
/// keyword rides a hot trend.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Weight of the demand (search volume) sub-score.
    pub demand: f64,
    /// Weight of the competition sub-score.
    pub competition: f64,
    /// Weight of the intent-fit sub-score.
    pub intent: f64,
    /// Weight of the region-fit sub-score.
    pub region: f64,
    /// Weight of the risk sub-score (subtracted).
    pub risk: f64,
    /// Multiplier applied to the final score for hot-trend keywords.
    pub hot_trend_boost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            demand: 0.25,
            competition: 0.35,
            intent: 0.20,
            region: 0.15,
            risk: 0.05,
            hot_trend_boost: 1.05,
        }
    }
}

/// Caps and relaxation factors for the staged final selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Hard cap on the number of recommended keywords.
    pub max_selected: usize,
    /// Cap for the strict threshold phase (phase 1).
    pub phase_one_cap: usize,
    /// Threshold factor for the first relaxation phase.
    pub half_factor: f64,
    /// Threshold factor for the second relaxation phase.
    pub quarter_factor: f64,
    /// Second relaxation runs only when fewer than this many are selected.
    pub relax_more_below: usize,
    /// Last-resort phase runs only when fewer than this many are selected.
    pub last_resort_below: usize,
    /// Last-resort admission requires a risk score below this value.
    pub last_resort_max_risk: u32,
    /// Cap on the number of overflow alternatives reported.
    pub max_alternatives: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_selected: 4,
            phase_one_cap: 3,
            half_factor: 0.5,
            quarter_factor: 0.25,
            relax_more_below: 3,
            last_resort_below: 2,
            last_resort_max_risk: 10,
            max_alternatives: 10,
        }
    }
}

/// Per-city minimum monthly search volume for keyword admission.
///
/// Normalizes for population-driven baseline search volume so that
/// low-competition keywords in small cities are not unfairly excluded.
/// Tiers: metro 150–200, mid-size 100–150, small 80.
#[derive(Debug, Clone, PartialEq)]
pub struct CityThresholds {
    /// Threshold for cities not present in `cities`.
    pub default: f64,
    /// City name to admission threshold.
    pub cities: BTreeMap<String, f64>,
}

impl CityThresholds {
    /// Returns the admission threshold for a city.
    pub fn for_city(&self, city: &str) -> f64 {
        self.cities.get(city).copied().unwrap_or(self.default)
    }
}

impl Default for CityThresholds {
    fn default() -> Self {
        let cities = [
            // Metro (population over 3M)
            ("서울", 200.0),
            ("부산", 150.0),
            ("대구", 150.0),
            // Mid-size (1M-3M)
            ("경기", 150.0),
            ("인천", 150.0),
            ("광주", 100.0),
            ("대전", 100.0),
            // Small (under 1M)
            ("울산", 80.0),
            ("세종", 80.0),
            ("강원", 80.0),
            ("전북", 80.0),
            ("전남", 80.0),
            ("경북", 80.0),
            ("경남", 80.0),
            ("제주", 80.0),
        ]
        .into_iter()
        .map(|(city, threshold)| (city.to_string(), threshold))
        .collect();

        Self {
            default: 100.0,
            cities,
        }
    }
}

/// Sizing and timing for the trend subsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendConfig {
    /// Maximum number of entries held by the trend cache.
    pub cache_capacity: usize,
    /// Freshness window for cached trend snapshots, in seconds.
    pub cache_ttl_secs: u64,
    /// Per-lookup timeout for the news-count source, in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Maximum number of main keywords prefetched per evaluation pass.
    pub max_main_keywords: usize,
    /// News-count bucket boundary for high hotness (exclusive).
    pub high_count: u64,
    /// News-count bucket boundary for medium hotness (exclusive).
    pub medium_count: u64,
    /// News-count boundary above which a keyword is flagged urgent.
    pub urgent_count: u64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 100,
            cache_ttl_secs: 3600,
            fetch_timeout_ms: 2500,
            max_main_keywords: 8,
            high_count: 100,
            medium_count: 20,
            urgent_count: 200,
        }
    }
}

/// Fully resolved configuration for the lokey pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Final score combination weights.
    pub weights: ScoringWeights,
    /// Final selector caps and relaxation factors.
    pub selector: SelectorConfig,
    /// Per-city admission thresholds.
    pub thresholds: CityThresholds,
    /// Trend cache and prefetch settings.
    pub trend: TrendConfig,
}

impl Config {
    /// Loads configuration from an optional override file.
    ///
    /// Returns the defaults when `path` is `None` or the file does not
    /// exist; any parse failure is an error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = parse_config_file(path)?;
        let config = raw.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Checks that configured values are internally consistent.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.max_selected == 0 {
            return Err(ConfigError::InvalidValue {
                field: "selector.max_selected".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.selector.phase_one_cap > self.selector.max_selected {
            return Err(ConfigError::InvalidValue {
                field: "selector.phase_one_cap".to_string(),
                reason: "must not exceed selector.max_selected".to_string(),
            });
        }
        for (name, factor) in [
            ("selector.half_factor", self.selector.half_factor),
            ("selector.quarter_factor", self.selector.quarter_factor),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(ConfigError::InvalidValue {
                    field: name.to_string(),
                    reason: "relaxation factor must be within 0.0..=1.0".to_string(),
                });
            }
        }
        if self.trend.cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trend.cache_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_thresholds_match_calibration() {
        let thresholds = CityThresholds::default();
        assert_eq!(thresholds.for_city("서울"), 200.0);
        assert_eq!(thresholds.for_city("제주"), 80.0);
        // Unlisted cities fall back to the default tier.
        assert_eq!(thresholds.for_city("유니크도시"), 100.0);
    }

    #[test]
    fn default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.demand, 0.25);
        assert_eq!(weights.competition, 0.35);
        assert_eq!(weights.intent, 0.20);
        assert_eq!(weights.region, 0.15);
        assert_eq!(weights.risk, 0.05);
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("lokey.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_phase_cap_is_rejected() {
        let mut config = Config::default();
        config.selector.phase_one_cap = 9;
        assert!(config.validate().is_err());
    }
}
