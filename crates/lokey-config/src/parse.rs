//! TOML override parsing.
//!
//! An override file only needs to name the values it changes; everything it
//! leaves out keeps the built-in calibration defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::{CityThresholds, Config, ScoringWeights, SelectorConfig, TrendConfig};

/// Partial configuration as read from a `lokey.toml` file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    weights: RawWeights,
    #[serde(default)]
    selector: RawSelector,
    #[serde(default)]
    thresholds: RawThresholds,
    #[serde(default)]
    trend: RawTrend,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWeights {
    demand: Option<f64>,
    competition: Option<f64>,
    intent: Option<f64>,
    region: Option<f64>,
    risk: Option<f64>,
    hot_trend_boost: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSelector {
    max_selected: Option<usize>,
    phase_one_cap: Option<usize>,
    half_factor: Option<f64>,
    quarter_factor: Option<f64>,
    relax_more_below: Option<usize>,
    last_resort_below: Option<usize>,
    last_resort_max_risk: Option<u32>,
    max_alternatives: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThresholds {
    default: Option<f64>,
    #[serde(default)]
    cities: BTreeMap<String, f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTrend {
    cache_capacity: Option<usize>,
    cache_ttl_secs: Option<u64>,
    fetch_timeout_ms: Option<u64>,
    max_main_keywords: Option<usize>,
    high_count: Option<u64>,
    medium_count: Option<u64>,
    urgent_count: Option<u64>,
}

impl RawConfig {
    /// Applies the overrides on top of the built-in defaults.
    pub fn into_config(self) -> Config {
        let weights = ScoringWeights::default();
        let selector = SelectorConfig::default();
        let mut thresholds = CityThresholds::default();
        let trend = TrendConfig::default();

        // City overrides merge into the default map rather than replacing it.
        thresholds.cities.extend(self.thresholds.cities);

        Config {
            weights: ScoringWeights {
                demand: self.weights.demand.unwrap_or(weights.demand),
                competition: self.weights.competition.unwrap_or(weights.competition),
                intent: self.weights.intent.unwrap_or(weights.intent),
                region: self.weights.region.unwrap_or(weights.region),
                risk: self.weights.risk.unwrap_or(weights.risk),
                hot_trend_boost: self
                    .weights
                    .hot_trend_boost
                    .unwrap_or(weights.hot_trend_boost),
            },
            selector: SelectorConfig {
                max_selected: self.selector.max_selected.unwrap_or(selector.max_selected),
                phase_one_cap: self
                    .selector
                    .phase_one_cap
                    .unwrap_or(selector.phase_one_cap),
                half_factor: self.selector.half_factor.unwrap_or(selector.half_factor),
                quarter_factor: self
                    .selector
                    .quarter_factor
                    .unwrap_or(selector.quarter_factor),
                relax_more_below: self
                    .selector
                    .relax_more_below
                    .unwrap_or(selector.relax_more_below),
                last_resort_below: self
                    .selector
                    .last_resort_below
                    .unwrap_or(selector.last_resort_below),
                last_resort_max_risk: self
                    .selector
                    .last_resort_max_risk
                    .unwrap_or(selector.last_resort_max_risk),
                max_alternatives: self
                    .selector
                    .max_alternatives
                    .unwrap_or(selector.max_alternatives),
            },
            thresholds: CityThresholds {
                default: self.thresholds.default.unwrap_or(thresholds.default),
                cities: thresholds.cities,
            },
            trend: TrendConfig {
                cache_capacity: self
                    .trend
                    .cache_capacity
                    .unwrap_or(trend.cache_capacity),
                cache_ttl_secs: self.trend.cache_ttl_secs.unwrap_or(trend.cache_ttl_secs),
                fetch_timeout_ms: self
                    .trend
                    .fetch_timeout_ms
                    .unwrap_or(trend.fetch_timeout_ms),
                max_main_keywords: self
                    .trend
                    .max_main_keywords
                    .unwrap_or(trend.max_main_keywords),
                high_count: self.trend.high_count.unwrap_or(trend.high_count),
                medium_count: self.trend.medium_count.unwrap_or(trend.medium_count),
                urgent_count: self.trend.urgent_count.unwrap_or(trend.urgent_count),
            },
        }
    }
}

/// Parses an override file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses override text directly, without a backing file.
pub fn parse_config_str(text: &str) -> Result<RawConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::ParseToml {
        path: "<inline>".into(),
        source,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_override_keeps_defaults() {
        let config = parse_config_str("").unwrap().into_config();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_merges() {
        let text = r#"
            [weights]
            competition = 0.4

            [thresholds.cities]
            "포항" = 90.0
        "#;
        let config = parse_config_str(text).unwrap().into_config();
        assert_eq!(config.weights.competition, 0.4);
        // Untouched values keep their defaults.
        assert_eq!(config.weights.demand, 0.25);
        assert_eq!(config.thresholds.for_city("포항"), 90.0);
        assert_eq!(config.thresholds.for_city("서울"), 200.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config_str("[weights]\nbogus = 1.0").is_err());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lokey.toml");
        std::fs::write(&path, "[trend]\ncache_capacity = 50\n").unwrap();
        let config = parse_config_file(&path).unwrap().into_config();
        assert_eq!(config.trend.cache_capacity, 50);
    }
}
