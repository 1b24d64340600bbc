//! Trend signals for keyword scoring.
//!
//! Recent news volume is the proxy for "is this topic moving right now".
//! This crate derives a small set of main keywords for a business, fetches
//! news counts for them concurrently with a bounded timeout, caches the
//! results, and layers deterministic seasonality on top. Every network
//! failure degrades to a neutral signal; scoring never blocks on trends.

#![warn(missing_docs)]

use serde::Serialize;

pub mod cache;
pub mod prefetch;
pub mod seasonal;
pub mod source;

pub use cache::TrendCache;
pub use prefetch::{TrendService, TrendSubject};
pub use seasonal::{SeasonalProfile, Volatility};
pub use source::{NaverNewsSource, NewsSignal, NewsSource, TrendError};

/// How hot a keyword's news coverage is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hotness {
    /// Heavy recent coverage.
    High,
    /// Moderate recent coverage.
    Medium,
    /// Little recent coverage.
    Low,
    /// No signal, typically because the fetch failed.
    None,
}

/// The trend signal for one main keyword.
#[derive(Debug, Clone, Serialize)]
pub struct TrendSnapshot {
    /// The main keyword the signal was fetched for.
    pub main_keyword: String,
    /// Coverage level derived from the article count.
    pub hotness: Hotness,
    /// Whether coverage is heavy enough to act on immediately.
    pub is_urgent: bool,
    /// Topic words pulled from recent article titles.
    pub related_keywords: Vec<String>,
    /// Total matching articles reported by the source.
    pub article_count: u64,
}

impl TrendSnapshot {
    /// A neutral snapshot for a keyword with no usable signal.
    pub fn empty(main_keyword: String) -> Self {
        TrendSnapshot {
            main_keyword,
            hotness: Hotness::None,
            is_urgent: false,
            related_keywords: Vec::new(),
            article_count: 0,
        }
    }
}

/// Trend snapshots for a business, in main-keyword derivation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendReport {
    snapshots: Vec<TrendSnapshot>,
}

impl TrendReport {
    /// Wraps snapshots, keeping their order.
    pub fn new(snapshots: Vec<TrendSnapshot>) -> Self {
        TrendReport { snapshots }
    }

    /// The snapshot for the first main keyword the phrase contains.
    ///
    /// Earlier main keywords are broader, so the first hit is the one that
    /// best represents the phrase's topic.
    pub fn for_phrase(&self, phrase: &str) -> Option<&TrendSnapshot> {
        self.snapshots
            .iter()
            .find(|snapshot| phrase.contains(&snapshot.main_keyword))
    }

    /// All snapshots in derivation order.
    pub fn snapshots(&self) -> &[TrendSnapshot] {
        &self.snapshots
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn for_phrase_prefers_earlier_keywords() {
        let report = TrendReport::new(vec![
            TrendSnapshot::empty("카페".to_string()),
            TrendSnapshot::empty("강남 카페".to_string()),
        ]);
        let hit = report.for_phrase("강남 카페 추천").unwrap();
        assert_eq!(hit.main_keyword, "카페");
        assert!(report.for_phrase("세차장 추천").is_none());
    }

    #[test]
    fn hotness_serializes_lowercase() {
        let json = serde_json::to_string(&Hotness::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(serde_json::to_string(&Hotness::None).unwrap(), "\"none\"");
    }
}
