//! Korean location resolution.
//!
//! Maps free business text ("강남역 카페", "경기도 광주시 태전동 세차장") to a
//! structured location: city, district, dong (administrative sub-district),
//! and micro-area (named commercial zone inside a dong). Resolution runs a
//! priority chain: alias table, then address token parsing, then a small
//! keyword heuristic, each with its own confidence level.
//!
//! All lookup tables are owned by [`GeoTables`], built once and injected
//! into the resolver, so tests can substitute alternate tables.

#![warn(missing_docs)]

pub mod address;
pub mod alias;
pub mod dong;
pub mod heuristic;
pub mod micro_area;
mod resolve;
mod tables;

pub use dong::{CharacteristicAdjustments, DongCharacteristic, DongDb, DongProfile};
pub use micro_area::{MicroAreaDb, MicroAreaInfo};
pub use resolve::LocationResolver;
pub use tables::GeoTables;

use serde::{Deserialize, Serialize};

/// Confidence attached to a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Resolution failed or matched only weak signals.
    Low,
    /// City matched without a district, or heuristic-only evidence.
    Medium,
    /// City and district both matched.
    High,
}

/// A resolved location for a business.
///
/// Produced once per request and immutable afterward; every downstream
/// scoring stage reads it for region-fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFacts {
    /// Normalized city name ("서울", "경기"). Empty when unresolved.
    pub city: String,
    /// Normalized district name ("강남", "광주시"). Empty when unresolved.
    pub district: String,
    /// Dong or myeon name, when the text carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dong: Option<String>,
    /// Named commercial zone inside the dong. Only attached when the dong
    /// itself resolved with high confidence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub micro_area: Option<String>,
    /// Resolution confidence.
    pub confidence: Confidence,
    /// Which resolution stage produced this result.
    pub source: String,
}

impl LocationFacts {
    /// An unresolved location. The caller decides how to render a missing
    /// location; this never stands in for a generic nationwide default.
    pub fn unresolved() -> Self {
        Self {
            city: String::new(),
            district: String::new(),
            dong: None,
            micro_area: None,
            confidence: Confidence::Low,
            source: "none".to_string(),
        }
    }

    /// Returns true when no city was resolved.
    pub fn is_empty(&self) -> bool {
        self.city.is_empty()
    }
}

impl Default for LocationFacts {
    fn default() -> Self {
        Self::unresolved()
    }
}
