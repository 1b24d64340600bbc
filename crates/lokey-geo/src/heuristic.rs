//! Last-chance keyword heuristic.
//!
//! A small neighborhood-name table matched against the combined input text
//! when both the alias table and address parsing come up empty. Hits are
//! medium confidence at best since a bare neighborhood word is weak
//! evidence.

/// One heuristic row: neighborhood words that imply a city/district.
#[derive(Debug, Clone)]
pub struct HeuristicEntry {
    /// City the keywords imply.
    pub city: String,
    /// District the keywords imply.
    pub district: String,
    /// Neighborhood words matched as substrings.
    pub keywords: Vec<String>,
}

/// Scans text for the first heuristic hit.
pub fn lookup<'entries>(
    entries: &'entries [HeuristicEntry],
    text: &str,
) -> Option<&'entries HeuristicEntry> {
    if text.is_empty() {
        return None;
    }
    entries.iter().find(|entry| {
        entry
            .keywords
            .iter()
            .any(|keyword| text.contains(keyword.as_str()))
    })
}

/// Builds the default heuristic table.
pub fn default_entries() -> Vec<HeuristicEntry> {
    DEFAULT_KEYWORDS
        .iter()
        .map(|(city, district, keywords)| HeuristicEntry {
            city: (*city).to_string(),
            district: (*district).to_string(),
            keywords: keywords.iter().map(|word| (*word).to_string()).collect(),
        })
        .collect()
}

/// (city, district, neighborhood keywords).
static DEFAULT_KEYWORDS: &[(&str, &str, &[&str])] = &[
    ("서울", "강남구", &["역삼", "삼성동", "대치"]),
    ("서울", "마포구", &["서교동", "동교동", "상수"]),
    ("서울", "송파구", &["석촌", "방이동", "가락시장"]),
    ("서울", "영등포구", &["여의나루", "63빌딩"]),
    ("서울", "성동구", &["성수", "성수동"]),
    ("서울", "금천구", &["가산디지털"]),
    ("부산", "부산진구", &["전포", "부전동"]),
    ("부산", "해운대구", &["센텀", "마린시티"]),
    ("부산", "수영구", &["광안"]),
    ("경기", "성남시", &["정자", "미금", "야탑"]),
    ("경기", "광주시", &["태전", "경안", "퇴촌"]),
    ("인천", "연수구", &["송도"]),
    ("대전", "유성구", &["유성온천", "대덕연구단지"]),
];
