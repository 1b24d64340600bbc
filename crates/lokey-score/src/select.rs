//! Phased final selection.
//!
//! Orders evaluated keywords by efficiency and admits them against the
//! city threshold, relaxing in fixed steps until enough are selected.
//! Relaxation is monotone: later phases only add, never remove, and
//! selection stops as soon as the cap is reached. Each selection carries
//! the phase that admitted it.

use serde::Serialize;

use lokey_config::SelectorConfig;

use crate::evaluate::EvaluatedKeyword;
use crate::round2;

/// Which relaxation step admitted a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// Met the full city threshold.
    Threshold,
    /// Admitted at half threshold.
    RelaxedHalf,
    /// Admitted at quarter threshold.
    RelaxedQuarter,
    /// Admitted with no volume requirement, risk-gated.
    LastResort,
}

/// One selected keyword with its admission phase.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedKeyword {
    /// The keyword.
    #[serde(flatten)]
    pub keyword: EvaluatedKeyword,
    /// The phase that admitted it.
    pub phase: SelectionPhase,
}

/// Summary counters for a selection pass.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationStats {
    /// Candidates that entered evaluation.
    pub total_candidates: usize,
    /// Evaluated keywords that met the full threshold.
    pub qualified_count: usize,
    /// Keywords in the final selection.
    pub final_count: usize,
    /// Whether anything at all was selected.
    pub found_low_competition: bool,
    /// The city threshold the pass ran against.
    pub dynamic_threshold: f64,
    /// "proceed", "focus" or "research".
    pub recommended_action: &'static str,
}

/// The outcome of a selection pass.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    /// Selected keywords in admission order.
    pub recommended: Vec<SelectedKeyword>,
    /// Next-best unselected keywords, by efficiency.
    pub alternatives: Vec<EvaluatedKeyword>,
    /// Summary counters.
    pub stats: EvaluationStats,
    /// Average efficiency across the selection, two decimals.
    pub avg_efficiency: f64,
}

/// Runs the phased selection over evaluated keywords.
///
/// `total_candidates` is the pre-evaluation candidate count, carried
/// through for the stats block.
pub fn select(
    evaluated: &[EvaluatedKeyword],
    threshold: f64,
    total_candidates: usize,
    config: &SelectorConfig,
) -> SelectionResult {
    let mut by_efficiency: Vec<&EvaluatedKeyword> = evaluated.iter().collect();
    // Efficiency first, composite score as tie-break; the sort is stable,
    // so equal keywords keep their evaluation order.
    by_efficiency.sort_by(|a, b| {
        b.efficiency
            .total_cmp(&a.efficiency)
            .then_with(|| b.score.total_cmp(&a.score))
    });

    let mut recommended: Vec<SelectedKeyword> = Vec::new();
    let admit = |phase: SelectionPhase,
                     cap: usize,
                     admits: &dyn Fn(&EvaluatedKeyword) -> bool,
                     recommended: &mut Vec<SelectedKeyword>| {
        for keyword in &by_efficiency {
            if recommended.len() >= cap {
                break;
            }
            if recommended
                .iter()
                .any(|selected| selected.keyword.phrase == keyword.phrase)
            {
                continue;
            }
            if admits(keyword) {
                recommended.push(SelectedKeyword {
                    keyword: (*keyword).clone(),
                    phase,
                });
            }
        }
    };

    admit(
        SelectionPhase::Threshold,
        config.phase_one_cap,
        &|keyword| keyword.meets_threshold,
        &mut recommended,
    );
    if recommended.len() < config.max_selected {
        let relaxed = threshold * config.half_factor;
        admit(
            SelectionPhase::RelaxedHalf,
            config.max_selected,
            &|keyword| keyword.adjusted_sv >= relaxed,
            &mut recommended,
        );
    }
    if recommended.len() < config.relax_more_below {
        let relaxed = threshold * config.quarter_factor;
        admit(
            SelectionPhase::RelaxedQuarter,
            config.max_selected,
            &|keyword| keyword.adjusted_sv >= relaxed,
            &mut recommended,
        );
    }
    if recommended.len() < config.last_resort_below {
        let max_risk = f64::from(config.last_resort_max_risk);
        admit(
            SelectionPhase::LastResort,
            config.max_selected,
            &|keyword| keyword.risk < max_risk,
            &mut recommended,
        );
    }

    let alternatives: Vec<EvaluatedKeyword> = by_efficiency
        .iter()
        .filter(|keyword| {
            !recommended
                .iter()
                .any(|selected| selected.keyword.phrase == keyword.phrase)
        })
        .take(config.max_alternatives)
        .map(|keyword| (*keyword).clone())
        .collect();

    let qualified_count = evaluated
        .iter()
        .filter(|keyword| keyword.meets_threshold)
        .count();
    let final_count = recommended.len();
    let avg_efficiency = if final_count == 0 {
        0.0
    } else {
        round2(
            recommended
                .iter()
                .map(|selected| selected.keyword.efficiency)
                .sum::<f64>()
                / final_count as f64,
        )
    };

    let stats = EvaluationStats {
        total_candidates,
        qualified_count,
        final_count,
        found_low_competition: final_count >= 1,
        dynamic_threshold: threshold,
        recommended_action: if final_count >= 2 {
            "proceed"
        } else if final_count == 1 {
            "focus"
        } else {
            "research"
        },
    };

    SelectionResult {
        recommended,
        alternatives,
        stats,
        avg_efficiency,
    }
}

#[cfg(test)]
mod test {
    use lokey_trend::Hotness;

    use super::*;
    use crate::evaluate::EvaluatedKeyword;

    fn keyword(phrase: &str, sv: f64, efficiency: f64, threshold: f64) -> EvaluatedKeyword {
        EvaluatedKeyword {
            phrase: phrase.to_string(),
            types: Vec::new(),
            adjusted_sv: sv,
            doc_count: 400.0,
            demand: 50.0,
            competition: 50.0,
            intent: 50.0,
            region: 50.0,
            risk: 10.0,
            score: efficiency * 10.0,
            efficiency,
            meets_threshold: sv >= threshold,
            trend_hotness: Hotness::None,
            trend_bonus: 0,
            trend_score: 50,
            seasonal_adjustment: 0,
            trend_score_with_seasonal: 50,
            warnings: Vec::new(),
            explanation: String::new(),
        }
    }

    #[test]
    fn caps_at_four_without_duplicates() {
        let threshold = 200.0;
        let evaluated: Vec<_> = (0..8)
            .map(|n| keyword(&format!("키워드{n}"), 500.0, 1.0 + n as f64 * 0.1, threshold))
            .collect();
        let result = select(&evaluated, threshold, 8, &SelectorConfig::default());
        assert_eq!(result.recommended.len(), 4);
        let phrases: std::collections::HashSet<_> = result
            .recommended
            .iter()
            .map(|selected| &selected.keyword.phrase)
            .collect();
        assert_eq!(phrases.len(), 4);
        assert_eq!(result.stats.recommended_action, "proceed");
    }

    #[test]
    fn relaxation_only_adds() {
        let threshold = 200.0;
        let evaluated = vec![
            keyword("충족", 250.0, 2.0, threshold),
            keyword("절반", 120.0, 1.5, threshold),
            keyword("사분", 60.0, 1.0, threshold),
        ];
        let result = select(&evaluated, threshold, 3, &SelectorConfig::default());
        assert_eq!(result.recommended[0].keyword.phrase, "충족");
        assert_eq!(result.recommended[0].phase, SelectionPhase::Threshold);
        assert_eq!(result.recommended[1].keyword.phrase, "절반");
        assert_eq!(result.recommended[1].phase, SelectionPhase::RelaxedHalf);
        assert_eq!(result.recommended[2].keyword.phrase, "사분");
        assert_eq!(result.recommended[2].phase, SelectionPhase::RelaxedQuarter);
    }

    #[test]
    fn last_resort_is_risk_gated() {
        let threshold = 200.0;
        let mut risky = keyword("위험", 10.0, 3.0, threshold);
        risky.risk = 90.0;
        let evaluated = vec![risky, keyword("저조", 10.0, 0.5, threshold)];
        let result = select(&evaluated, threshold, 2, &SelectorConfig::default());
        // Neither clears any volume phase; the last resort rejects both on
        // risk, so nothing is selected.
        assert!(result.recommended.is_empty());
        assert_eq!(result.stats.recommended_action, "research");
        assert!(!result.stats.found_low_competition);
    }

    #[test]
    fn efficiency_orders_with_score_tiebreak() {
        let threshold = 100.0;
        let mut a = keyword("가", 500.0, 1.0, threshold);
        a.score = 40.0;
        let mut b = keyword("나", 500.0, 1.0, threshold);
        b.score = 60.0;
        let evaluated = vec![a, b];
        let result = select(&evaluated, threshold, 2, &SelectorConfig::default());
        assert_eq!(result.recommended[0].keyword.phrase, "나");
    }

    #[test]
    fn alternatives_come_from_the_overflow() {
        let threshold = 100.0;
        let evaluated: Vec<_> = (0..12)
            .map(|n| keyword(&format!("키워드{n}"), 500.0, 2.0 - n as f64 * 0.1, threshold))
            .collect();
        let result = select(&evaluated, threshold, 12, &SelectorConfig::default());
        assert_eq!(result.recommended.len(), 4);
        assert_eq!(result.alternatives.len(), 8);
        assert!(result
            .alternatives
            .windows(2)
            .all(|pair| pair[0].efficiency >= pair[1].efficiency));
        assert_eq!(result.stats.qualified_count, 12);
    }

    #[test]
    fn single_selection_says_focus() {
        let threshold = 200.0;
        let evaluated = vec![keyword("하나", 250.0, 1.0, threshold)];
        let result = select(&evaluated, threshold, 1, &SelectorConfig::default());
        assert_eq!(result.stats.recommended_action, "focus");
        assert_eq!(result.avg_efficiency, 1.0);
    }
}
