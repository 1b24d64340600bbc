//! The resolution priority chain.

use crate::{Confidence, GeoTables, LocationFacts, address, alias, heuristic};

/// Resolves free business text into a [`LocationFacts`].
///
/// Stages run in priority order, first success wins:
/// 1. alias table on the place text, then on the description,
/// 2. address token parsing on the combined text,
/// 3. neighborhood keyword heuristic,
/// 4. unresolved.
///
/// Aliases outrank address parsing even when the description spells out a
/// full address; the alias table's ordering keeps shorthands like
/// "경기광주" from being swallowed by broader spellings.
#[derive(Debug, Clone, Default)]
pub struct LocationResolver {
    tables: GeoTables,
}

impl LocationResolver {
    /// Creates a resolver over the given tables.
    pub fn new(tables: GeoTables) -> Self {
        Self { tables }
    }

    /// The tables this resolver consults. Shared with the evaluator for
    /// region scoring and the adjacency guard.
    pub fn tables(&self) -> &GeoTables {
        &self.tables
    }

    /// Resolves a location from place text and description.
    pub fn resolve(&self, place_text: &str, description: &str) -> LocationFacts {
        if let Some(hit) = alias::lookup(&self.tables.aliases, place_text) {
            return Self::from_alias(hit);
        }
        if let Some(hit) = alias::lookup(&self.tables.aliases, description) {
            return Self::from_alias(hit);
        }

        let combined = format!("{place_text} {description}");
        if let Some(parsed) = address::parse(&self.tables.cities, &combined) {
            // Micro-areas attach only via the high-confidence dong mapping,
            // so a sibling dong's zone name never bleeds in.
            let micro_area = parsed.dong.as_deref().and_then(|dong| {
                self.tables
                    .micro_areas
                    .primary(&parsed.city, &parsed.district, dong)
                    .map(str::to_string)
            });
            return LocationFacts {
                city: parsed.city,
                district: parsed.district,
                dong: parsed.dong,
                micro_area,
                confidence: parsed.confidence,
                source: "address_parsing".to_string(),
            };
        }

        if let Some(hit) = heuristic::lookup(&self.tables.heuristics, &combined) {
            return LocationFacts {
                city: hit.city.clone(),
                district: hit.district.clone(),
                dong: None,
                micro_area: None,
                confidence: Confidence::Medium,
                source: "keyword_heuristic".to_string(),
            };
        }

        LocationFacts::unresolved()
    }

    fn from_alias(hit: alias::AliasMatch) -> LocationFacts {
        let confidence = if hit.district.is_empty() {
            Confidence::Medium
        } else {
            Confidence::High
        };
        LocationFacts {
            city: hit.city,
            district: hit.district,
            dong: None,
            micro_area: hit.micro_poi,
            confidence,
            source: "alias".to_string(),
        }
    }
}
