//! Strategy combinations over the ranked pool.
//!
//! Four fixed plays: gold (low competition, high volume), brand
//! reinforcement, search-intent coverage, and easy wins. A combination is
//! only emitted when its filter matches something, so callers may get
//! fewer than four.

use serde::Serialize;

use crate::rank::{RankStrategy, RankedKeyword};

/// A named group of keywords pursuing one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct Combination {
    /// Display name.
    pub name: String,
    /// Machine-readable strategy key.
    pub strategy: &'static str,
    /// Member keywords.
    pub keywords: Vec<RankedKeyword>,
    /// Combined search volume.
    pub total_volume: f64,
    /// Mean competing-document count, rounded.
    pub avg_competition: f64,
    /// One-line pitch for the strategy.
    pub recommendation: String,
}

fn combination(
    name: &str,
    strategy: &'static str,
    keywords: Vec<RankedKeyword>,
) -> Combination {
    let total_volume: f64 = keywords.iter().map(|keyword| keyword.search_volume).sum();
    let avg_competition = (keywords
        .iter()
        .map(|keyword| keyword.doc_count)
        .sum::<f64>()
        / keywords.len() as f64)
        .round();
    let avg_volume = (total_volume / keywords.len() as f64).round();
    let recommendation = match strategy {
        "gold" => format!(
            "저경쟁({avg_competition}) 높은검색량({avg_volume}) 조합 - 빠른 순위 상승 기대"
        ),
        "brand" => "브랜드 강화 조합 - 차별화된 포지셔닝".to_string(),
        "intent" => "검색 의도 완벽 대응 - 실제 고객의 검색어".to_string(),
        _ => "쉬운 승리 조합 - 저경쟁 키워드로 빠른 매출 연결".to_string(),
    };
    Combination {
        name: name.to_string(),
        strategy,
        keywords,
        total_volume,
        avg_competition,
        recommendation,
    }
}

/// Builds up to four strategy combinations from a ranked pool.
pub fn build_combinations(pool: &[RankedKeyword]) -> Vec<Combination> {
    let mut out: Vec<Combination> = Vec::new();

    let mut gold: Vec<RankedKeyword> = pool
        .iter()
        .filter(|keyword| keyword.is_low_competition && keyword.search_volume > 1000.0)
        .cloned()
        .collect();
    gold.sort_by(|a, b| {
        (b.search_volume - b.doc_count).total_cmp(&(a.search_volume - a.doc_count))
    });
    gold.truncate(3);
    if !gold.is_empty() {
        out.push(combination("저경쟁 높은검색량 조합", "gold", gold));
    }

    let mut brand: Vec<RankedKeyword> = pool
        .iter()
        .filter(|keyword| keyword.strategy == RankStrategy::Brand)
        .cloned()
        .collect();
    brand.sort_by(|a, b| b.search_volume.total_cmp(&a.search_volume));
    brand.truncate(3);
    if !brand.is_empty() {
        // One strong location phrase rounds out the brand story.
        let supplement = pool
            .iter()
            .find(|keyword| {
                keyword.strategy == RankStrategy::LocationCategory
                    && keyword.search_volume > 1500.0
            })
            .cloned();
        brand.extend(supplement);
        out.push(combination("브랜드 강화 조합", "brand", brand));
    }

    let mut intent: Vec<RankedKeyword> = pool
        .iter()
        .filter(|keyword| {
            matches!(
                keyword.strategy,
                RankStrategy::LocationCategory | RankStrategy::Service
            )
        })
        .cloned()
        .collect();
    intent.sort_by(|a, b| {
        let bonus = |keyword: &RankedKeyword| {
            if keyword.strategy == RankStrategy::LocationCategory {
                1000.0
            } else {
                0.0
            }
        };
        (b.search_volume + bonus(b)).total_cmp(&(a.search_volume + bonus(a)))
    });
    intent.truncate(3);
    if !intent.is_empty() {
        out.push(combination("검색 의도 대응 조합", "intent", intent));
    }

    let mut easy_win: Vec<RankedKeyword> = pool
        .iter()
        .filter(|keyword| keyword.doc_count < 500.0 && keyword.search_volume > 500.0)
        .cloned()
        .collect();
    easy_win.sort_by(|a, b| b.search_volume.total_cmp(&a.search_volume));
    easy_win.truncate(4);
    if !easy_win.is_empty() {
        out.push(combination("저경쟁 쉬운승리 조합", "easy_win", easy_win));
    }

    out.truncate(4);
    out
}

/// The user-facing note accompanying the combinations.
pub fn combination_notice(count: usize) -> String {
    if count == 0 {
        "효율성 기반 최적 키워드를 찾지 못했습니다. 다른 조건으로 다시 시도해주세요.".to_string()
    } else if count < 4 {
        format!("업체 최적화를 위한 키워드 {count}가지 조합을 추출했습니다.")
    } else {
        "업체 최적화를 위한 키워드 4가지 조합을 추출했습니다.".to_string()
    }
}
