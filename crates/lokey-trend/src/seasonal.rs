//! Deterministic seasonality for common business categories.
//!
//! Monthly demand multipliers for a handful of well-understood verticals.
//! A multiplier above 1.0 means the month searches above its yearly
//! average. Categories match on a contains basis in both directions, so
//! "스팀세차" finds the 세차 profile and "카페" finds a "감성카페"
//! description too.

use serde::Serialize;

/// How strongly a category's demand swings over the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    /// Multipliers stay close to 1.0.
    Low,
    /// Noticeable but moderate swings.
    Medium,
    /// Strong peaks and troughs.
    High,
}

/// Yearly demand shape for one category family.
#[derive(Debug)]
pub struct SeasonalProfile {
    /// Pipe-separated aliases this profile matches.
    keys: &'static [&'static str],
    /// January through December demand multipliers.
    multipliers: [f64; 12],
    /// Months the category peaks in.
    pub peak_months: &'static [&'static str],
    /// Months the category bottoms out in.
    pub low_months: &'static [&'static str],
    /// Swing strength.
    pub volatility: Volatility,
}

/// Below this multiplier a month is flagged as off-season.
const LOW_SEASON_FLOOR: f64 = 0.7;
/// Above this multiplier a month is flagged as peak season.
const PEAK_SEASON_CEIL: f64 = 1.3;

static PROFILES: &[SeasonalProfile] = &[
    SeasonalProfile {
        keys: &["cafe", "카페"],
        multipliers: [0.8, 0.85, 1.0, 1.15, 1.2, 1.05, 1.1, 1.15, 1.0, 1.2, 1.1, 0.9],
        peak_months: &["5월", "10월"],
        low_months: &["1월", "2월"],
        volatility: Volatility::Low,
    },
    SeasonalProfile {
        keys: &["carwash", "세차"],
        multipliers: [0.7, 0.8, 1.3, 1.5, 1.2, 1.0, 0.9, 1.1, 1.2, 1.0, 0.8, 0.6],
        peak_months: &["3월", "4월"],
        low_months: &["12월", "1월"],
        volatility: Volatility::High,
    },
    SeasonalProfile {
        keys: &["fitness", "헬스"],
        multipliers: [2.0, 1.3, 0.9, 0.8, 0.7, 1.0, 0.8, 0.9, 1.1, 1.2, 1.3, 1.5],
        peak_months: &["1월", "12월"],
        low_months: &["5월", "7월"],
        volatility: Volatility::High,
    },
    SeasonalProfile {
        keys: &["restaurant", "음식점"],
        multipliers: [1.0, 1.0, 1.1, 1.2, 1.15, 1.0, 1.1, 1.15, 1.0, 1.1, 1.2, 1.1],
        peak_months: &["4월", "11월"],
        low_months: &["1월", "2월"],
        volatility: Volatility::Low,
    },
    SeasonalProfile {
        keys: &["beauty", "미용"],
        multipliers: [1.2, 1.0, 1.1, 1.2, 1.1, 0.9, 1.0, 1.0, 1.1, 1.2, 1.1, 1.3],
        peak_months: &["12월", "1월"],
        low_months: &["6월"],
        volatility: Volatility::Medium,
    },
    SeasonalProfile {
        keys: &["dental", "치과"],
        multipliers: [1.2, 1.0, 1.0, 1.0, 1.0, 1.1, 1.0, 1.0, 1.0, 1.0, 1.1, 1.2],
        peak_months: &["1월", "12월"],
        low_months: &[],
        volatility: Volatility::Low,
    },
];

/// Looks up the profile for a category description.
///
/// A profile matches when the category contains one of its aliases or an
/// alias contains the category.
pub fn profile(category: &str) -> Option<&'static SeasonalProfile> {
    let category = category.trim();
    if category.is_empty() {
        return None;
    }
    PROFILES.iter().find(|profile| {
        profile
            .keys
            .iter()
            .any(|key| category.contains(key) || key.contains(category))
    })
}

impl SeasonalProfile {
    /// Demand multiplier for a 1-based month.
    pub fn multiplier(&self, month: u32) -> f64 {
        let idx = month.clamp(1, 12) as usize - 1;
        self.multipliers[idx]
    }
}

/// Demand multiplier for a category and 1-based month, 1.0 when the
/// category has no profile.
pub fn multiplier_for(category: &str, month: u32) -> f64 {
    profile(category).map_or(1.0, |profile| profile.multiplier(month))
}

/// Score adjustment derived from a multiplier: +50 points per doubled
/// demand, negative below average.
pub fn adjustment(multiplier: f64) -> i64 {
    ((multiplier - 1.0) * 50.0).round() as i64
}

/// A warning when the month deviates from average demand by more than 30%.
pub fn warning(category: &str, month: u32) -> Option<String> {
    let profile = profile(category)?;
    let multiplier = profile.multiplier(month);
    if multiplier > PEAK_SEASON_CEIL {
        Some(format!(
            "{month}월은 {category} 성수기입니다. 경쟁이 치열하니 차별화된 콘텐츠를 준비하세요."
        ))
    } else if multiplier < LOW_SEASON_FLOOR {
        Some(format!(
            "{month}월은 {category} 비수기입니다. 검색량이 평소보다 낮을 수 있습니다."
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bidirectional_contains_lookup() {
        assert!(profile("스팀세차").is_some());
        assert!(profile("카").is_some());
        assert!(profile("법률사무소").is_none());
        assert!(profile("").is_none());
    }

    #[test]
    fn fitness_peaks_in_january() {
        let fitness = profile("헬스장").unwrap();
        assert_eq!(fitness.multiplier(1), 2.0);
        assert_eq!(fitness.multiplier(5), 0.7);
        assert_eq!(fitness.volatility, Volatility::High);
    }

    #[test]
    fn unprofiled_category_is_neutral() {
        assert_eq!(multiplier_for("법률사무소", 6), 1.0);
        assert_eq!(adjustment(multiplier_for("법률사무소", 6)), 0);
    }

    #[test]
    fn adjustment_scales_with_deviation() {
        assert_eq!(adjustment(1.5), 25);
        assert_eq!(adjustment(2.0), 50);
        assert_eq!(adjustment(0.6), -20);
        assert_eq!(adjustment(1.0), 0);
    }

    #[test]
    fn warnings_fire_past_thirty_percent() {
        // 세차 April multiplier is 1.5, December 0.6, June 1.0.
        assert!(warning("세차", 4).is_some());
        assert!(warning("세차", 12).is_some());
        assert!(warning("세차", 6).is_none());
        // 카페 January is 0.8, inside the band.
        assert!(warning("카페", 1).is_none());
    }

    #[test]
    fn out_of_range_month_clamps() {
        let cafe = profile("카페").unwrap();
        assert_eq!(cafe.multiplier(0), cafe.multiplier(1));
        assert_eq!(cafe.multiplier(13), cafe.multiplier(12));
    }
}
