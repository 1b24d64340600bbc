//! Broad keyword pool ranking.
//!
//! A coarser sibling of the low-competition evaluator: builds a wide pool
//! of brand, location, service, experience and general keywords, scores
//! each with estimate-derived competition and confidence, and orders the
//! pool by priority. Combination building works over this pool.

use serde::Serialize;

use lokey_keyword::BusinessFacets;

use crate::CompetitionLevel;

/// Strategic family a pool keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    /// Brand name phrases.
    Brand,
    /// Place plus category phrases.
    LocationCategory,
    /// Concrete menu or service names.
    Service,
    /// Feature and price-range phrases.
    Experience,
    /// Generic category searches.
    General,
}

/// An unscored pool entry.
#[derive(Debug, Clone)]
pub struct RankCandidate {
    /// The keyword phrase.
    pub phrase: String,
    /// Strategic family.
    pub strategy: RankStrategy,
    /// 1 (most important) through 5.
    pub priority: u8,
    /// Estimated monthly search volume.
    pub sv_estimate: f64,
    /// Why the phrase is in the pool.
    pub reasoning: String,
}

/// A scored pool entry.
#[derive(Debug, Clone, Serialize)]
pub struct RankedKeyword {
    /// The keyword phrase.
    pub phrase: String,
    /// Strategic family.
    pub strategy: RankStrategy,
    /// 1 (most important) through 5.
    pub priority: u8,
    /// Estimated monthly search volume.
    pub search_volume: f64,
    /// Volume discounted for estimation optimism.
    pub effective_volume: f64,
    /// Estimated competing document count.
    pub doc_count: f64,
    /// Local-relevance score.
    pub local_score: u32,
    /// Whether the estimate puts this under the easy-competition line.
    pub is_low_competition: bool,
    /// Coarse competition bucket.
    pub competition_level: CompetitionLevel,
    /// Estimate confidence, 0.3 to 0.95.
    pub confidence: f64,
    /// Why the phrase is in the pool.
    pub why: String,
}

/// The pool-path competition buckets are coarser than the evaluator's:
/// the estimates here come from a multiplier, not a baseline table.
fn bucket_estimate(doc_count: f64) -> CompetitionLevel {
    if doc_count < 200.0 {
        CompetitionLevel::VeryLow
    } else if doc_count < 800.0 {
        CompetitionLevel::Low
    } else if doc_count < 2000.0 {
        CompetitionLevel::Medium
    } else {
        CompetitionLevel::High
    }
}

/// Builds the rule-based keyword pool for a business.
pub fn fallback_pool(facets: &BusinessFacets) -> Vec<RankCandidate> {
    let place_name = if facets.place_name.is_empty() {
        "업체"
    } else {
        &facets.place_name
    };
    let category = facets.primary_category();
    let city = &facets.location.city;
    let district = &facets.location.district;
    let items = facets.item_names();

    let mut pool: Vec<RankCandidate> = Vec::new();
    let mut push = |phrase: String, strategy, priority, sv, reasoning: String| {
        pool.push(RankCandidate {
            phrase,
            strategy,
            priority,
            sv_estimate: sv,
            reasoning,
        });
    };

    push(
        place_name.to_string(),
        RankStrategy::Brand,
        1,
        3000.0,
        "브랜드 이름".to_string(),
    );
    if !district.is_empty() {
        push(
            format!("{place_name} {district}"),
            RankStrategy::Brand,
            1,
            2000.0,
            "브랜드 + 지역".to_string(),
        );
        push(
            format!("{district} {category}"),
            RankStrategy::LocationCategory,
            2,
            2500.0,
            "지역 + 카테고리".to_string(),
        );
    }
    if !city.is_empty() && !district.is_empty() {
        push(
            format!("{city} {district} {category}"),
            RankStrategy::LocationCategory,
            2,
            1800.0,
            "도시 + 지역 + 카테고리".to_string(),
        );
    }
    for (idx, item) in items.iter().enumerate() {
        push(
            (*item).to_string(),
            RankStrategy::Service,
            2,
            2000.0 - idx as f64 * 300.0,
            format!("주요 서비스: {item}"),
        );
        if !district.is_empty() {
            push(
                format!("{district} {item}"),
                RankStrategy::Service,
                2,
                1500.0 - idx as f64 * 200.0,
                format!("지역 + 서비스: {item}"),
            );
        }
    }
    for (idx, feature) in facets.features.iter().enumerate() {
        if feature.chars().count() < 20 {
            push(
                feature.clone(),
                RankStrategy::Experience,
                3,
                1500.0 - idx as f64 * 200.0,
                format!("특징: {feature}"),
            );
        }
    }
    if let Some(price_range) = &facets.price_range {
        push(
            format!("{price_range} {category}"),
            RankStrategy::Experience,
            3,
            1200.0,
            "가격대 + 카테고리".to_string(),
        );
    }
    push(
        format!("{category} 추천"),
        RankStrategy::General,
        4,
        1000.0,
        "일반 검색".to_string(),
    );
    if !district.is_empty() {
        push(
            format!("{district} 추천 {category}"),
            RankStrategy::General,
            4,
            800.0,
            "지역별 추천".to_string(),
        );
    }

    let mut seen: Vec<String> = Vec::new();
    pool.retain(|candidate| {
        if seen.contains(&candidate.phrase) {
            false
        } else {
            seen.push(candidate.phrase.clone());
            true
        }
    });
    pool
}

/// Scores and orders a keyword pool.
///
/// Returns at most 50 keywords, ordered by priority, then volume.
pub fn rank_keywords(pool: Vec<RankCandidate>, facets: &BusinessFacets) -> Vec<RankedKeyword> {
    let city = &facets.location.city;
    let district = &facets.location.district;

    let mut out: Vec<RankedKeyword> = pool
        .into_iter()
        .map(|candidate| {
            let sv = candidate.sv_estimate;
            // Service and experience phrases, and location phrases that pin
            // down the district, face far fewer competing documents.
            let lightly_contested = matches!(
                candidate.strategy,
                RankStrategy::Service | RankStrategy::Experience
            ) || (candidate.strategy == RankStrategy::LocationCategory
                && !district.is_empty()
                && candidate.phrase.contains(district.as_str()));
            let factor = if lightly_contested { 0.3 } else { 0.6 };
            let doc_count = (sv * factor).max(100.0).round();

            let place_term = if district.is_empty() { city } else { district };
            let local_score = if !place_term.is_empty() && candidate.phrase.contains(place_term.as_str())
            {
                95
            } else if !district.is_empty() {
                70
            } else {
                50
            };

            let confidence =
                (0.95 - (candidate.priority.saturating_sub(1)) as f64 * 0.1).max(0.3);

            RankedKeyword {
                phrase: candidate.phrase,
                strategy: candidate.strategy,
                priority: candidate.priority,
                search_volume: sv,
                effective_volume: (sv * 0.8).round(),
                doc_count,
                local_score,
                is_low_competition: doc_count < 800.0,
                competition_level: bucket_estimate(doc_count),
                confidence,
                why: candidate.reasoning,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.search_volume.total_cmp(&a.search_volume))
    });
    out.truncate(50);
    out
}

#[cfg(test)]
mod test {
    use lokey_geo::{Confidence, LocationFacts};
    use lokey_keyword::MenuItem;

    use super::*;

    fn facets() -> BusinessFacets {
        BusinessFacets {
            place_name: "모모카페".to_string(),
            category: vec!["카페".to_string()],
            items: vec![
                MenuItem {
                    name: "라떼".to_string(),
                    signature: true,
                },
                MenuItem {
                    name: "브런치".to_string(),
                    signature: false,
                },
            ],
            features: vec!["24시간".to_string()],
            price_range: Some("만원대".to_string()),
            location: LocationFacts {
                city: "서울".to_string(),
                district: "강남구".to_string(),
                dong: None,
                micro_area: None,
                confidence: Confidence::High,
                source: "address_parsing".to_string(),
            },
            ..BusinessFacets::default()
        }
    }

    #[test]
    fn pool_covers_all_strategies() {
        let pool = fallback_pool(&facets());
        for strategy in [
            RankStrategy::Brand,
            RankStrategy::LocationCategory,
            RankStrategy::Service,
            RankStrategy::Experience,
            RankStrategy::General,
        ] {
            assert!(pool.iter().any(|candidate| candidate.strategy == strategy));
        }
        let unique: std::collections::HashSet<_> =
            pool.iter().map(|candidate| &candidate.phrase).collect();
        assert_eq!(unique.len(), pool.len());
    }

    #[test]
    fn brand_phrase_leads_the_ranking() {
        let ranked = rank_keywords(fallback_pool(&facets()), &facets());
        assert_eq!(ranked[0].phrase, "모모카페");
        assert_eq!(ranked[0].priority, 1);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].priority <= pair[1].priority));
    }

    #[test]
    fn district_location_phrases_score_lightly_contested() {
        let ranked = rank_keywords(fallback_pool(&facets()), &facets());
        let location = ranked
            .iter()
            .find(|keyword| keyword.phrase == "강남구 카페")
            .unwrap();
        // 2500 * 0.3
        assert_eq!(location.doc_count, 750.0);
        assert!(location.is_low_competition);
        assert_eq!(location.local_score, 95);
        let brand = ranked
            .iter()
            .find(|keyword| keyword.phrase == "모모카페")
            .unwrap();
        // 3000 * 0.6
        assert_eq!(brand.doc_count, 1800.0);
        assert!(!brand.is_low_competition);
        assert_eq!(brand.competition_level, CompetitionLevel::Medium);
    }

    #[test]
    fn confidence_decays_with_priority() {
        let ranked = rank_keywords(fallback_pool(&facets()), &facets());
        let brand = ranked
            .iter()
            .find(|keyword| keyword.priority == 1)
            .unwrap();
        let general = ranked
            .iter()
            .find(|keyword| keyword.priority == 4)
            .unwrap();
        assert!((brand.confidence - 0.95).abs() < 1e-9);
        assert!((general.confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn no_location_still_produces_pool() {
        let mut facets = facets();
        facets.location = LocationFacts::unresolved();
        let ranked = rank_keywords(fallback_pool(&facets), &facets);
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|keyword| keyword.local_score == 50));
    }
}
