//! Aggregated lookup tables.

use crate::address::{self, CityEntry};
use crate::alias::{self, AliasEntry};
use crate::dong::{self, DongDb};
use crate::heuristic::{self, HeuristicEntry};
use crate::micro_area::{self, MicroAreaDb};

/// All geographic lookup tables, built once at startup and injected into
/// the resolver and evaluator. Read-only after construction.
#[derive(Debug, Clone)]
pub struct GeoTables {
    /// Shorthand place-name table.
    pub aliases: Vec<AliasEntry>,
    /// City and district normalization maps.
    pub cities: Vec<CityEntry>,
    /// Commercial zones by dong.
    pub micro_areas: MicroAreaDb,
    /// Dong characteristic profiles.
    pub dong_profiles: DongDb,
    /// Neighborhood keyword fallback.
    pub heuristics: Vec<HeuristicEntry>,
}

impl Default for GeoTables {
    fn default() -> Self {
        Self {
            aliases: alias::default_entries(),
            cities: address::default_cities(),
            micro_areas: micro_area::default_db(),
            dong_profiles: dong::default_db(),
            heuristics: heuristic::default_entries(),
        }
    }
}
