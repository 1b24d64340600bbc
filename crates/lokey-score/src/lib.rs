//! Keyword evaluation and selection.
//!
//! Takes raw candidate keywords and turns them into a ranked, explained
//! shortlist: per-keyword sub-scores (demand, competition, intent, region,
//! risk), a weighted composite, a phased selector that relaxes its
//! admission threshold until it has something to recommend, and strategy
//! combinations built over the ranked pool.

#![warn(missing_docs)]

pub mod combo;
pub mod evaluate;
pub mod rank;
pub mod select;

pub use combo::{Combination, build_combinations, combination_notice};
pub use evaluate::{EvalContext, EvaluatedKeyword, evaluate_candidates};
pub use rank::{RankCandidate, RankStrategy, RankedKeyword, fallback_pool, rank_keywords};
pub use select::{EvaluationStats, SelectedKeyword, SelectionPhase, SelectionResult, select};

/// Competition bucket derived from total document count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    /// Fewer than 300 competing documents.
    VeryLow,
    /// Fewer than 600.
    Low,
    /// Fewer than 1000.
    Medium,
    /// 1000 or more.
    High,
}

impl CompetitionLevel {
    /// Buckets a document count.
    pub fn from_doc_count(doc_count: f64) -> Self {
        if doc_count < 300.0 {
            CompetitionLevel::VeryLow
        } else if doc_count < 600.0 {
            CompetitionLevel::Low
        } else if doc_count < 1000.0 {
            CompetitionLevel::Medium
        } else {
            CompetitionLevel::High
        }
    }
}

/// Qualitative efficiency label shown to the writer.
pub fn efficiency_rating(efficiency: f64) -> &'static str {
    if efficiency >= 1.0 {
        "최고"
    } else if efficiency >= 0.7 {
        "우수"
    } else if efficiency >= 0.4 {
        "양호"
    } else {
        "일반"
    }
}

/// Confidence label for a volume estimate.
pub fn data_confidence(search_volume: f64) -> &'static str {
    if search_volume >= 1000.0 {
        "high"
    } else if search_volume >= 500.0 {
        "medium"
    } else {
        "low"
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn competition_buckets() {
        assert_eq!(CompetitionLevel::from_doc_count(299.0), CompetitionLevel::VeryLow);
        assert_eq!(CompetitionLevel::from_doc_count(300.0), CompetitionLevel::Low);
        assert_eq!(CompetitionLevel::from_doc_count(999.0), CompetitionLevel::Medium);
        assert_eq!(CompetitionLevel::from_doc_count(1000.0), CompetitionLevel::High);
    }

    #[test]
    fn rating_labels() {
        assert_eq!(efficiency_rating(1.2), "최고");
        assert_eq!(efficiency_rating(0.7), "우수");
        assert_eq!(efficiency_rating(0.4), "양호");
        assert_eq!(efficiency_rating(0.1), "일반");
    }

    #[test]
    fn confidence_labels() {
        assert_eq!(data_confidence(1500.0), "high");
        assert_eq!(data_confidence(600.0), "medium");
        assert_eq!(data_confidence(100.0), "low");
    }

    #[test]
    fn round2_behaves() {
        assert_eq!(round2(1.005), 1.0); // floating representation of 1.005 sits just below
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(0.125), 0.13);
    }
}
