//! Per-keyword evaluation.
//!
//! Every candidate gets an adjusted search volume, an estimated competing
//! document count, five sub-scores, a weighted composite, and a written
//! explanation. Volumes and document counts are estimates layered from
//! phrase-type baselines, dong characteristics, trend hotness and
//! seasonality; the point is consistent relative ordering, not absolute
//! traffic numbers.

use serde::Serialize;

use lokey_config::Config;
use lokey_geo::{DongCharacteristic, DongProfile, GeoTables};
use lokey_keyword::{BusinessFacets, CandidateKeyword, TypeTag};
use lokey_trend::{Hotness, TrendReport, seasonal};

use crate::{CompetitionLevel, round2};

/// Phrases touching these topics are never worth the moderation risk.
static RISK_TERMS: &[&str] = &["불법", "위조", "가짜", "약물", "성인"];

/// Baseline competing-document counts by phrase type, most specific
/// first. A candidate resolves to the first entry any of its tag names
/// starts with, so compound tags inherit their family baseline unless
/// listed explicitly.
static DOC_BASELINES: &[(&str, f64)] = &[
    ("dong_service_intent", 250.0),
    ("micro_area_service_intent", 280.0),
    ("dong_service", 350.0),
    ("micro_area_service", 380.0),
    ("dong_category", 400.0),
    ("micro_area_category", 420.0),
    ("location_service_intent", 300.0),
    ("location_category", 500.0),
    ("location_service", 450.0),
    ("service_intent", 650.0),
    ("brand", 200.0),
];

/// Fallback baseline for unlisted tag families.
const DOC_BASELINE_DEFAULT: f64 = 800.0;

/// Everything evaluation needs beyond the candidates themselves.
pub struct EvalContext<'ctx> {
    /// The business being written about.
    pub facets: &'ctx BusinessFacets,
    /// Geographic lookup tables.
    pub tables: &'ctx GeoTables,
    /// Weights, thresholds and trend settings.
    pub config: &'ctx Config,
    /// Current 1-based month, for seasonality.
    pub month: u32,
    /// Trend snapshots for the business's main keywords.
    pub trends: &'ctx TrendReport,
}

/// A fully scored keyword.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatedKeyword {
    /// The keyword phrase.
    pub phrase: String,
    /// Phrase type tags.
    pub types: Vec<TypeTag>,
    /// Search volume after all adjustments.
    pub adjusted_sv: f64,
    /// Estimated competing document count.
    pub doc_count: f64,
    /// Demand sub-score, 0-100.
    pub demand: f64,
    /// Competition sub-score, 0-100 (higher is less contested).
    pub competition: f64,
    /// Intent-match sub-score, 0-100.
    pub intent: f64,
    /// Region-match sub-score, 0-100.
    pub region: f64,
    /// Moderation-risk sub-score, higher is riskier.
    pub risk: f64,
    /// Weighted composite, rounded to two decimals.
    pub score: f64,
    /// Searches per competing document, rounded to two decimals.
    pub efficiency: f64,
    /// Whether adjusted volume clears the city's admission threshold.
    pub meets_threshold: bool,
    /// Trend hotness of the matched main keyword.
    pub trend_hotness: Hotness,
    /// Flat score bonus from trend hotness.
    pub trend_bonus: i64,
    /// Trend score, 50 base plus hotness.
    pub trend_score: i64,
    /// Seasonal score adjustment for the current month.
    pub seasonal_adjustment: i64,
    /// Trend score with seasonality folded in.
    pub trend_score_with_seasonal: i64,
    /// Writer-facing warnings (off-season, risk, surging news).
    pub warnings: Vec<String>,
    /// One-paragraph rationale for the score.
    pub explanation: String,
}

impl EvaluatedKeyword {
    /// Competition bucket for display.
    pub fn competition_level(&self) -> CompetitionLevel {
        CompetitionLevel::from_doc_count(self.doc_count)
    }
}

/// Scores candidates against the business context.
///
/// Phrases that name a sibling dong's commercial zone are dropped before
/// scoring. Results come back sorted by composite score, best first.
pub fn evaluate_candidates(
    candidates: &[CandidateKeyword],
    ctx: &EvalContext<'_>,
) -> Vec<EvaluatedKeyword> {
    let location = &ctx.facets.location;
    let dong_profile = location.dong.as_ref().and_then(|dong| {
        ctx.tables
            .dong_profiles
            .profile(&location.city, &location.district, dong)
    });
    let threshold = ctx.config.thresholds.for_city(&location.city);

    let mut out: Vec<EvaluatedKeyword> = Vec::new();
    for candidate in candidates {
        if ctx.tables.micro_areas.phrase_conflicts(
            &candidate.phrase,
            &location.city,
            &location.district,
            location.dong.as_deref(),
        ) {
            log::debug!(
                "dropping {:?}: names a neighboring commercial zone",
                candidate.phrase
            );
            continue;
        }
        out.push(evaluate_one(candidate, ctx, dong_profile, threshold));
    }
    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}

fn evaluate_one(
    candidate: &CandidateKeyword,
    ctx: &EvalContext<'_>,
    dong_profile: Option<&DongProfile>,
    threshold: f64,
) -> EvaluatedKeyword {
    let snapshot = ctx.trends.for_phrase(&candidate.phrase);
    let hotness = snapshot.map_or(Hotness::None, |snapshot| snapshot.hotness);

    let adjusted_sv = adjusted_volume(candidate, hotness, dong_profile);
    let doc_count = doc_count(candidate, hotness, dong_profile);

    let demand = (adjusted_sv / 10.0).min(100.0);
    let competition = (100.0 - doc_count / 30.0).max(0.0);
    let intent = intent_score(candidate, ctx, dong_profile, snapshot);
    let region = region_score(candidate, ctx);
    let risk = risk_score(&candidate.phrase);

    let weights = &ctx.config.weights;
    let mut score = weights.demand * demand + weights.competition * competition
        + weights.intent * intent
        + weights.region * region
        - weights.risk * risk;
    if hotness == Hotness::High {
        score *= weights.hot_trend_boost;
    }
    let score = round2(score);

    let efficiency = if doc_count == 0.0 {
        0.0
    } else {
        round2(adjusted_sv / doc_count)
    };

    let trend_bonus = match hotness {
        Hotness::High => 15,
        Hotness::Medium => 5,
        Hotness::Low | Hotness::None => 0,
    };
    let trend_score = match hotness {
        Hotness::High => 75,
        Hotness::Medium => 60,
        Hotness::Low | Hotness::None => 50,
    };
    let category = ctx.facets.primary_category();
    let multiplier = seasonal::multiplier_for(category, ctx.month);
    let seasonal_adjustment = seasonal::adjustment(multiplier);

    let mut warnings: Vec<String> = Vec::new();
    if let Some(warning) = seasonal::warning(category, ctx.month) {
        warnings.push(warning);
    }
    if snapshot.is_some_and(|snapshot| snapshot.is_urgent) {
        warnings.push(format!(
            "'{}' 관련 뉴스가 급증하고 있습니다. 지금 발행하면 노출 기회가 큽니다.",
            candidate.phrase
        ));
    }
    if risk >= 90.0 {
        warnings.push("금지 소재가 포함된 키워드입니다. 사용하지 마세요.".to_string());
    }

    let explanation = explanation(&candidate.phrase, adjusted_sv, doc_count, intent, region);

    EvaluatedKeyword {
        phrase: candidate.phrase.clone(),
        types: candidate.types.clone(),
        adjusted_sv: round2(adjusted_sv),
        doc_count: round2(doc_count),
        demand: round2(demand),
        competition: round2(competition),
        intent: round2(intent),
        region: round2(region),
        risk,
        score,
        efficiency,
        meets_threshold: adjusted_sv >= threshold,
        trend_hotness: hotness,
        trend_bonus,
        trend_score,
        seasonal_adjustment,
        trend_score_with_seasonal: trend_score + seasonal_adjustment,
        warnings,
        explanation,
    }
}

/// Layers volume adjustments over the raw estimate.
fn adjusted_volume(
    candidate: &CandidateKeyword,
    hotness: Hotness,
    dong_profile: Option<&DongProfile>,
) -> f64 {
    let mut sv = candidate.estimated_sv;
    if candidate.types.contains(&TypeTag::LocationService) {
        sv *= 1.5;
    }
    if candidate.types.contains(&TypeTag::LocationCategory) {
        sv *= 1.3;
    }
    if candidate.types.contains(&TypeTag::DongService) {
        sv = sv.max(450.0);
    }
    if candidate.types.contains(&TypeTag::MicroAreaService) {
        sv = sv.max(500.0);
    }
    // Floor estimates for service verticals the model reliably lowballs.
    if candidate.phrase.contains("스팀세차") || candidate.phrase.contains("세차") {
        sv = sv.max(800.0);
    }
    if candidate.phrase.contains("광택") {
        sv = sv.max(700.0);
    }
    if let Some(profile) = dong_profile {
        let involves_service = candidate.types.iter().any(|tag| tag.involves_service());
        if involves_service {
            sv *= 1.0 + profile.adjustments().demand as f64 / 100.0;
        }
    }
    match hotness {
        Hotness::High => sv * 1.15,
        Hotness::Medium => sv * 1.05,
        Hotness::Low | Hotness::None => sv,
    }
}

/// Estimated competing document count for a candidate.
fn doc_count(
    candidate: &CandidateKeyword,
    hotness: Hotness,
    dong_profile: Option<&DongProfile>,
) -> f64 {
    let mut doc_count = baseline_for(&candidate.types);
    if let Some(profile) = dong_profile {
        doc_count += profile.adjustments().competition as f64;
        doc_count = doc_count.max(100.0);
    }
    match hotness {
        Hotness::High => doc_count + 50.0,
        Hotness::Medium => doc_count + 20.0,
        Hotness::Low | Hotness::None => doc_count,
    }
}

/// Takes the first table row any of the candidate's tags matches; rows are
/// ordered most-specific first, so a multi-tag candidate is priced by its
/// most specific tag regardless of tag order.
fn baseline_for(tags: &[TypeTag]) -> f64 {
    DOC_BASELINES
        .iter()
        .find(|(prefix, _)| tags.iter().any(|tag| tag.name().starts_with(prefix)))
        .map_or(DOC_BASELINE_DEFAULT, |(_, baseline)| *baseline)
}

/// Intent sub-score: how well the phrase matches what this business's
/// searchers are actually after.
fn intent_score(
    candidate: &CandidateKeyword,
    ctx: &EvalContext<'_>,
    dong_profile: Option<&DongProfile>,
    snapshot: Option<&lokey_trend::TrendSnapshot>,
) -> f64 {
    let phrase = &candidate.phrase;
    let phrase_lower = phrase.to_lowercase();
    let category = ctx.facets.primary_category();
    let mut score = 30.0;
    if phrase.contains(category) {
        score += 40.0;
    }
    for item in &ctx.facets.items {
        if phrase_lower.contains(&item.name.to_lowercase()) {
            score += 20.0;
        }
    }
    if candidate.types.iter().any(|tag| tag.is_intent()) {
        score += 10.0;
    }
    if let Some(profile) = dong_profile {
        let demographic_match = ctx.facets.audience.iter().any(|audience| {
            profile.target_demographics.iter().any(|demographic| {
                audience.contains(demographic.as_str()) || demographic.contains(audience.as_str())
            })
        });
        if demographic_match {
            score += 15.0;
        }
        if profile.has(DongCharacteristic::Education) && category.contains("학원") {
            score += 10.0;
        }
        if profile.has(DongCharacteristic::Tourist) && category.contains("카페") {
            score += 10.0;
        }
    }
    if let Some(snapshot) = snapshot {
        let related_hits = snapshot
            .related_keywords
            .iter()
            .filter(|related| phrase.contains(related.as_str()))
            .count();
        score += 5.0 * related_hits as f64;
    }
    score.min(100.0)
}

/// Region sub-score: how precisely the phrase targets the business's
/// actual neighborhood.
fn region_score(candidate: &CandidateKeyword, ctx: &EvalContext<'_>) -> f64 {
    let phrase = &candidate.phrase;
    let location = &ctx.facets.location;
    let mut score: f64 = 30.0;
    let names_city = !location.city.is_empty() && phrase.contains(&location.city);
    let names_district = !location.district.is_empty() && phrase.contains(&location.district);
    if names_city || names_district {
        score += 50.0;
    }
    if location
        .dong
        .as_ref()
        .is_some_and(|dong| phrase.contains(dong.as_str()))
    {
        score += 30.0;
    }
    if location
        .micro_area
        .as_ref()
        .is_some_and(|micro_area| phrase.contains(micro_area.as_str()))
    {
        score += 25.0;
    }
    if candidate.types.iter().any(|tag| tag.is_location_based()) {
        score += 20.0;
    }
    score.min(100.0)
}

fn risk_score(phrase: &str) -> f64 {
    if RISK_TERMS.iter().any(|term| phrase.contains(term)) {
        90.0
    } else {
        10.0
    }
}

fn explanation(phrase: &str, adjusted_sv: f64, doc_count: f64, intent: f64, region: f64) -> String {
    let mut parts: Vec<String> = Vec::new();
    if doc_count < 300.0 {
        parts.push("경쟁 문서가 매우 적어 상위 노출 가능성이 높습니다".to_string());
    } else if doc_count < 600.0 {
        parts.push("경쟁 문서가 적은 편입니다".to_string());
    } else if doc_count < 1000.0 {
        parts.push("경쟁이 보통 수준입니다".to_string());
    } else {
        parts.push("경쟁 문서가 많아 상위 노출이 어려울 수 있습니다".to_string());
    }
    if adjusted_sv > 1500.0 {
        parts.push("검색량이 많은 키워드입니다".to_string());
    } else if adjusted_sv > 800.0 {
        parts.push("검색량이 꾸준한 키워드입니다".to_string());
    }
    if intent > 70.0 {
        parts.push("검색 의도가 업종과 강하게 일치합니다".to_string());
    } else if intent > 50.0 {
        parts.push("검색 의도가 업종과 어느 정도 일치합니다".to_string());
    }
    if region > 70.0 {
        parts.push("지역 타겟팅이 정확합니다".to_string());
    } else if region > 50.0 {
        parts.push("지역 연관성이 있습니다".to_string());
    }
    format!("'{phrase}': {}.", parts.join(", "))
}

#[cfg(test)]
mod test {
    use lokey_geo::{Confidence, LocationFacts, LocationResolver};
    use lokey_keyword::MenuItem;
    use lokey_trend::{TrendReport, TrendSnapshot};

    use super::*;

    fn facets() -> BusinessFacets {
        BusinessFacets {
            place_name: "모모카페".to_string(),
            category: vec!["카페".to_string()],
            items: vec![MenuItem {
                name: "라떼".to_string(),
                signature: true,
            }],
            audience: vec!["직장인".to_string()],
            location: LocationFacts {
                city: "서울".to_string(),
                district: "강남구".to_string(),
                dong: Some("역삼동".to_string()),
                micro_area: Some("강남역".to_string()),
                confidence: Confidence::High,
                source: "address_parsing".to_string(),
            },
            ..BusinessFacets::default()
        }
    }

    fn candidate(phrase: &str, types: Vec<TypeTag>, sv: f64) -> CandidateKeyword {
        CandidateKeyword::new(phrase.to_string(), types, sv)
    }

    fn hot_snapshot(keyword: &str) -> TrendSnapshot {
        TrendSnapshot {
            main_keyword: keyword.to_string(),
            hotness: Hotness::High,
            is_urgent: false,
            related_keywords: Vec::new(),
            article_count: 150,
        }
    }

    #[test]
    fn compound_tag_inherits_family_baseline() {
        assert_eq!(baseline_for(&[TypeTag::LocationCategoryIntent]), 500.0);
        assert_eq!(baseline_for(&[TypeTag::LocationCategory]), 500.0);
        assert_eq!(baseline_for(&[TypeTag::DongServiceIntent]), 250.0);
        assert_eq!(baseline_for(&[TypeTag::DongService]), 350.0);
        assert_eq!(baseline_for(&[TypeTag::LocationService]), 450.0);
        assert_eq!(baseline_for(&[TypeTag::Category]), 800.0);
    }

    #[test]
    fn baseline_is_priced_by_most_specific_tag() {
        // Tag order in the candidate is irrelevant; the table order wins.
        assert_eq!(baseline_for(&[TypeTag::Brand, TypeTag::DongService]), 350.0);
        assert_eq!(baseline_for(&[TypeTag::DongService, TypeTag::Brand]), 350.0);
        assert_eq!(baseline_for(&[TypeTag::General]), 800.0);
        assert_eq!(baseline_for(&[]), 800.0);
    }

    #[test]
    fn doc_count_uses_compound_baseline_under_trend() {
        let facets = facets();
        let config = Config::default();
        let tables = GeoTables::default();
        let trends = TrendReport::new(vec![hot_snapshot("카페")]);
        let ctx = EvalContext {
            facets: &facets,
            tables: &tables,
            config: &config,
            month: 6,
            trends: &trends,
        };
        let evaluated = evaluate_candidates(
            &[candidate(
                "서울 카페 추천",
                vec![TypeTag::LocationCategoryIntent],
                900.0,
            )],
            &ctx,
        );
        // 역삼동 is a commercial hub: 500 + 20, then +50 for the hot trend.
        assert_eq!(evaluated[0].doc_count, 570.0);
        assert_eq!(evaluated[0].trend_hotness, Hotness::High);
        assert_eq!(evaluated[0].trend_bonus, 15);
        assert_eq!(evaluated[0].trend_score, 75);
    }

    #[test]
    fn efficiency_is_rounded_and_guarded() {
        let facets = facets();
        let config = Config::default();
        let tables = GeoTables::default();
        let trends = TrendReport::default();
        let ctx = EvalContext {
            facets: &facets,
            tables: &tables,
            config: &config,
            month: 6,
            trends: &trends,
        };
        let evaluated = evaluate_candidates(
            &[candidate("강남 카페", vec![TypeTag::LocationCategory], 1000.0)],
            &ctx,
        );
        let keyword = &evaluated[0];
        assert!(keyword.doc_count > 0.0);
        let expected = (keyword.adjusted_sv / keyword.doc_count * 100.0).round() / 100.0;
        assert_eq!(keyword.efficiency, expected);
    }

    #[test]
    fn sibling_zone_phrases_are_dropped() {
        let mut facets = facets();
        facets.location = LocationFacts {
            city: "경기".to_string(),
            district: "광주시".to_string(),
            dong: Some("태전동".to_string()),
            micro_area: Some("태전지구".to_string()),
            confidence: Confidence::High,
            source: "address_parsing".to_string(),
        };
        let config = Config::default();
        let tables = GeoTables::default();
        let trends = TrendReport::default();
        let ctx = EvalContext {
            facets: &facets,
            tables: &tables,
            config: &config,
            month: 6,
            trends: &trends,
        };
        let evaluated = evaluate_candidates(
            &[
                candidate("광주신도시 카페", vec![TypeTag::MicroAreaCategory], 500.0),
                candidate("태전지구 카페", vec![TypeTag::MicroAreaCategory], 500.0),
            ],
            &ctx,
        );
        assert_eq!(evaluated.len(), 1);
        assert_eq!(evaluated[0].phrase, "태전지구 카페");
    }

    #[test]
    fn carwash_phrases_get_a_volume_floor() {
        let candidate = candidate("태전동 스팀세차", vec![TypeTag::DongService], 100.0);
        let sv = adjusted_volume(&candidate, Hotness::None, None);
        assert_eq!(sv, 800.0);
    }

    #[test]
    fn risk_terms_flag_the_phrase() {
        assert_eq!(risk_score("강남 불법 주차"), 90.0);
        assert_eq!(risk_score("강남 카페"), 10.0);
    }

    #[test]
    fn results_sorted_by_score_descending() {
        let facets = facets();
        let config = Config::default();
        let tables = GeoTables::default();
        let trends = TrendReport::default();
        let ctx = EvalContext {
            facets: &facets,
            tables: &tables,
            config: &config,
            month: 6,
            trends: &trends,
        };
        let evaluated = evaluate_candidates(
            &[
                candidate("모모카페", vec![TypeTag::Brand], 500.0),
                candidate("강남역 카페 추천", vec![TypeTag::MicroAreaServiceIntent], 400.0),
                candidate("카페", vec![TypeTag::Category], 2000.0),
            ],
            &ctx,
        );
        assert!(evaluated.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn end_to_end_alias_resolution_feeds_scoring() {
        let resolver = LocationResolver::new(GeoTables::default());
        let location = resolver.resolve("강남역 모모카페", "분위기 좋은 카페");
        assert_eq!(location.city, "서울");
        assert_eq!(location.district, "강남");
        let mut facets = facets();
        facets.location = location;
        let config = Config::default();
        let tables = GeoTables::default();
        let trends = TrendReport::default();
        let ctx = EvalContext {
            facets: &facets,
            tables: &tables,
            config: &config,
            month: 6,
            trends: &trends,
        };
        let evaluated = evaluate_candidates(
            &[candidate("강남역 카페", vec![TypeTag::MicroAreaCategory], 1500.0)],
            &ctx,
        );
        assert!(evaluated[0].region > 70.0);
    }
}
