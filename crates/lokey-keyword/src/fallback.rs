//! Deterministic rule-based candidate generation.
//!
//! The guaranteed second stage: combines the business's place slots (city,
//! district, dong, micro-area) with its category, top menu items, and a
//! fixed intent word list. Estimated volumes fall with slot depth since a
//! more specific phrase is searched less but competes less.

use crate::candidate::{CandidateKeyword, TypeTag};
use crate::facets::BusinessFacets;

/// The fixed intent word list.
pub static INTENT_WORDS: &[&str] = &["추천", "예약", "주차", "빠른"];

/// Generates rule-based candidates from facets.
///
/// Always returns at least one candidate: with no usable slots at all it
/// falls back to the bare category.
pub fn generate(facets: &BusinessFacets) -> Vec<CandidateKeyword> {
    let category = facets.primary_category();
    let items = facets.item_names();
    let location = &facets.location;
    let city = nonempty(&location.city);
    let district = nonempty(&location.district);
    let dong = location.dong.as_deref();
    let micro_area = location.micro_area.as_deref();

    let mut out: Vec<CandidateKeyword> = Vec::new();
    let mut push = |phrase: String, tag: TypeTag, sv: f64| {
        out.push(CandidateKeyword::new(phrase, vec![tag], sv));
    };

    // Place + category, from broadest to narrowest slot.
    if let Some(city) = city {
        push(format!("{city} {category}"), TypeTag::LocationCategory, 1500.0);
    }
    if let Some(district) = district {
        push(format!("{district} {category}"), TypeTag::LocationCategory, 1200.0);
    }
    if let Some(dong) = dong {
        push(format!("{dong} {category}"), TypeTag::DongCategory, 600.0);
    }
    if let Some(micro_area) = micro_area {
        push(format!("{micro_area} {category}"), TypeTag::MicroAreaCategory, 700.0);
    }

    // Place + menu item. Broad slots take the top three items, narrow ones
    // fewer.
    for (idx, item) in items.iter().take(3).enumerate() {
        if let Some(city) = city {
            push(
                format!("{city} {item}"),
                TypeTag::LocationService,
                900.0 - idx as f64 * 100.0,
            );
        }
        if let Some(district) = district {
            push(
                format!("{district} {item}"),
                TypeTag::LocationService,
                800.0 - idx as f64 * 100.0,
            );
        }
        if let Some(dong) = dong {
            push(
                format!("{dong} {item}"),
                TypeTag::DongService,
                400.0 - idx as f64 * 50.0,
            );
        }
    }
    for (idx, item) in items.iter().take(2).enumerate() {
        if let Some(micro_area) = micro_area {
            push(
                format!("{micro_area} {item}"),
                TypeTag::MicroAreaService,
                500.0 - idx as f64 * 50.0,
            );
        }
    }

    // Menu item + intent word.
    for item in &items {
        for (idx, intent) in INTENT_WORDS.iter().take(2).enumerate() {
            push(
                format!("{item} {intent}"),
                TypeTag::ServiceIntent,
                700.0 - idx as f64 * 100.0,
            );
        }
    }

    // Narrow place + first item + intent word.
    if let Some(first_item) = items.first() {
        for (idx, intent) in INTENT_WORDS.iter().take(2).enumerate() {
            if let Some(dong) = dong {
                push(
                    format!("{dong} {first_item} {intent}"),
                    TypeTag::DongServiceIntent,
                    300.0 - idx as f64 * 50.0,
                );
            }
            if let Some(micro_area) = micro_area {
                push(
                    format!("{micro_area} {first_item} {intent}"),
                    TypeTag::MicroAreaServiceIntent,
                    350.0 - idx as f64 * 50.0,
                );
            }
            if let Some(district) = district {
                push(
                    format!("{district} {first_item} {intent}"),
                    TypeTag::LocationServiceIntent,
                    500.0 - idx as f64 * 100.0,
                );
            }
        }
    }

    // Short features + category.
    for (idx, feature) in facets
        .features
        .iter()
        .filter(|feature| feature.chars().count() < 15)
        .take(2)
        .enumerate()
    {
        push(
            format!("{feature} {category}"),
            TypeTag::FeatureCategory,
            700.0 - idx as f64 * 100.0,
        );
    }

    // Brand phrases.
    if !facets.place_name.is_empty() {
        let name = &facets.place_name;
        push(name.clone(), TypeTag::Brand, 500.0);
        if let Some(dong) = dong {
            push(format!("{name} {dong}"), TypeTag::Brand, 300.0);
        }
        if let Some(district) = district {
            push(format!("{name} {district}"), TypeTag::Brand, 400.0);
        }
    }

    if out.is_empty() {
        out.push(CandidateKeyword::new(
            category.to_string(),
            vec![TypeTag::Category],
            1000.0,
        ));
    }
    out
}

fn nonempty(text: &str) -> Option<&str> {
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod test {
    use lokey_geo::{Confidence, LocationFacts};

    use super::*;
    use crate::facets::MenuItem;

    fn facets() -> BusinessFacets {
        BusinessFacets {
            place_name: "광주세차".to_string(),
            category: vec!["세차장".to_string()],
            items: vec![
                MenuItem {
                    name: "스팀세차".to_string(),
                    signature: true,
                },
                MenuItem {
                    name: "광택".to_string(),
                    signature: false,
                },
            ],
            location: LocationFacts {
                city: "경기".to_string(),
                district: "광주시".to_string(),
                dong: Some("태전동".to_string()),
                micro_area: Some("태전지구".to_string()),
                confidence: Confidence::High,
                source: "address_parsing".to_string(),
            },
            ..BusinessFacets::default()
        }
    }

    fn find<'slice>(
        candidates: &'slice [CandidateKeyword],
        phrase: &str,
    ) -> &'slice CandidateKeyword {
        candidates
            .iter()
            .find(|candidate| candidate.phrase == phrase)
            .unwrap()
    }

    #[test]
    fn slot_depth_determines_volume() {
        let candidates = generate(&facets());
        assert_eq!(find(&candidates, "경기 세차장").estimated_sv, 1500.0);
        assert_eq!(find(&candidates, "광주시 세차장").estimated_sv, 1200.0);
        assert_eq!(find(&candidates, "태전동 세차장").estimated_sv, 600.0);
        assert_eq!(find(&candidates, "태전지구 세차장").estimated_sv, 700.0);
        // Narrow slot stacks get lower but non-zero estimates.
        let narrow = find(&candidates, "태전동 스팀세차 추천");
        assert_eq!(narrow.estimated_sv, 300.0);
        assert_eq!(narrow.types, vec![TypeTag::DongServiceIntent]);
    }

    #[test]
    fn second_item_drops_by_step() {
        let candidates = generate(&facets());
        assert_eq!(find(&candidates, "경기 스팀세차").estimated_sv, 900.0);
        assert_eq!(find(&candidates, "경기 광택").estimated_sv, 800.0);
        assert_eq!(find(&candidates, "태전지구 광택").estimated_sv, 450.0);
    }

    #[test]
    fn brand_phrases_present() {
        let candidates = generate(&facets());
        assert_eq!(find(&candidates, "광주세차").types, vec![TypeTag::Brand]);
        assert_eq!(find(&candidates, "광주세차 태전동").estimated_sv, 300.0);
        assert_eq!(find(&candidates, "광주세차 광주시").estimated_sv, 400.0);
    }

    #[test]
    fn bare_facets_yield_category_candidate() {
        let facets = BusinessFacets::default();
        let candidates = generate(&facets);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].phrase, "가게");
        assert_eq!(candidates[0].types, vec![TypeTag::Category]);
        assert_eq!(candidates[0].estimated_sv, 1000.0);
    }

    #[test]
    fn every_candidate_is_tagged() {
        let candidates = generate(&facets());
        assert!(candidates.iter().all(|candidate| !candidate.types.is_empty()));
    }
}
