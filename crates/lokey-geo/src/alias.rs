//! Shorthand place-name normalization.
//!
//! Koreans rarely write full administrative addresses; they write "홍대",
//! "분당", "강남역". This table maps those shorthands to canonical
//! city/district pairs, with an optional micro-POI for the commercial zone
//! the shorthand names.

/// One alias-table row: several shorthand spellings mapping to one
/// canonical location.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    /// Shorthand spellings, matched as substrings of the input.
    pub aliases: Vec<String>,
    /// Canonical city name.
    pub city: String,
    /// Canonical district name.
    pub district: String,
    /// Commercial zone the shorthand refers to, when it names one.
    pub micro_poi: Option<String>,
}

/// Result of a successful alias lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    /// Canonical city.
    pub city: String,
    /// Canonical district.
    pub district: String,
    /// Commercial zone, when the alias names one.
    pub micro_poi: Option<String>,
}

/// Scans `text` for the first alias-table hit.
///
/// Table order is load-bearing: earlier entries win, so more specific
/// shorthands must precede entries whose aliases are substrings of them.
pub fn lookup(entries: &[AliasEntry], text: &str) -> Option<AliasMatch> {
    if text.is_empty() {
        return None;
    }
    for entry in entries {
        for alias in &entry.aliases {
            if text.contains(alias.as_str()) {
                return Some(AliasMatch {
                    city: entry.city.clone(),
                    district: entry.district.clone(),
                    micro_poi: entry.micro_poi.clone(),
                });
            }
        }
    }
    None
}

/// Builds the default alias table.
pub fn default_entries() -> Vec<AliasEntry> {
    DEFAULT_ALIASES
        .iter()
        .map(|(aliases, city, district, micro_poi)| AliasEntry {
            aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
            city: (*city).to_string(),
            district: (*district).to_string(),
            micro_poi: micro_poi.map(str::to_string),
        })
        .collect()
}

/// Shorthand mapping rows: (aliases, city, district, micro POI).
///
/// Seoul, Busan, and Gyeonggi carry the densest coverage since they account
/// for most small-business traffic.
#[allow(clippy::type_complexity)]
static DEFAULT_ALIASES: &[(&[&str], &str, &str, Option<&str>)] = &[
    // 서울
    (
        &["홍대", "홍대입구", "홍대입구역", "합정", "합정역"],
        "서울",
        "마포",
        Some("홍대동"),
    ),
    (&["망원", "망원동", "망원역"], "서울", "마포", Some("망원동")),
    (&["신촌", "신촌역"], "서울", "마포", Some("신촌동")),
    (
        &["강남역", "신사동", "가로수길"],
        "서울",
        "강남",
        Some("강남역"),
    ),
    (&["역삼", "역삼동", "테헤란로"], "서울", "강남", Some("역삼동")),
    (&["압구정", "청담", "청담동"], "서울", "강남", Some("신사동")),
    (&["코엑스"], "서울", "강남", Some("역삼동")),
    (
        &["잠실", "잠실동", "잠실역", "롯데월드"],
        "서울",
        "송파",
        Some("잠실동"),
    ),
    (&["명동", "명동역"], "서울", "종로", Some("명동")),
    (&["종로", "광화문"], "서울", "종로", Some("종로동")),
    (&["충무로", "을지로"], "서울", "중구", Some("충무로")),
    (&["서울역"], "서울", "중구", Some("순화동")),
    (&["이태원", "이태원역"], "서울", "중구", Some("이태원동")),
    (&["여의도", "여의동"], "서울", "영등포", Some("여의동")),
    (&["서초", "서초동", "반포", "반포동"], "서울", "서초", Some("서초동")),
    (&["신도림", "신도림역", "구로동"], "서울", "구로", Some("신도림동")),
    (&["신림"], "서울", "관악", Some("신림동")),
    (&["노량진"], "서울", "동작", Some("노량진동")),
    (&["수유", "수유역"], "서울", "강북", Some("수유동")),
    (&["건대", "건대입구역"], "서울", "성동", Some("건대동")),
    (&["천호", "천호동", "천호역"], "서울", "강동", Some("천호동")),
    (&["강남구"], "서울", "강남", Some("강남동")),
    (&["마포구"], "서울", "마포", Some("홍대동")),
    (&["송파구"], "서울", "송파", Some("잠실동")),
    (&["강남", "강남 중심"], "서울", "강남", Some("강남동")),
    // 부산
    (&["서면", "서면역"], "부산", "부산진", Some("서면동")),
    (
        &["해운대", "해운대역", "해운대해수욕장"],
        "부산",
        "해운대",
        Some("해운대동"),
    ),
    (&["광안리", "광안해변"], "부산", "수영", Some("광안동")),
    // 경기 — 순서 주의: "경기광주"가 광역시 "광주"보다 위에 있어야 한다.
    (
        &["분당", "분당신도시", "판교", "판교역", "서현", "서현역"],
        "경기",
        "성남",
        Some("분당동"),
    ),
    (&["수원", "수원역"], "경기", "수원", Some("영동")),
    (&["일산", "일산신도시", "고양시"], "경기", "고양", Some("일산동")),
    (&["경기광주", "경기 광주", "광주시"], "경기", "광주", Some("광주동")),
    (&["미사", "미사신도시", "하남"], "경기", "하남", Some("미사동")),
    (&["의정부", "의정부역"], "경기", "의정부", Some("의정부동")),
    (&["성남시"], "경기", "성남", Some("분당동")),
    (&["경기도"], "경기", "성남", Some("분당동")),
    // 광역시/도 단위
    (&["인천", "인천역"], "인천", "중구", Some("신생동")),
    (&["대구", "대구역", "동성로"], "대구", "중구", Some("동성로")),
    (&["광주 중심"], "광주", "동구", Some("동명동")),
    (&["대전", "대전역"], "대전", "중구", Some("중앙동")),
    (&["울산", "울산역"], "울산", "중구", Some("성남동")),
    (&["강릉", "강릉역"], "강원", "강릉", Some("강릉동")),
    (&["춘천", "춘천역"], "강원", "춘천", Some("춘천동")),
    (&["속초", "속초역"], "강원", "속초", Some("속초동")),
    (&["전주", "전주역", "전주 한옥마을"], "전북", "전주", Some("완산구")),
    (&["경주", "불국사"], "경북", "경주", Some("경주동")),
    (&["제주", "제주시", "한라산"], "제주", "제주시", Some("용담동")),
    (&["서귀포", "서귀포시"], "제주", "서귀포시", Some("토평동")),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn station_shorthand_resolves_canonical_district() {
        let entries = default_entries();
        let hit = lookup(&entries, "강남역 카페").unwrap();
        assert_eq!(hit.city, "서울");
        assert_eq!(hit.district, "강남");
        assert_eq!(hit.micro_poi.as_deref(), Some("강남역"));
    }

    #[test]
    fn gyeonggi_gwangju_beats_metro_gwangju() {
        let entries = default_entries();
        let hit = lookup(&entries, "경기광주 세차장").unwrap();
        assert_eq!(hit.city, "경기");
        assert_eq!(hit.district, "광주");
    }

    #[test]
    fn no_alias_returns_none() {
        let entries = default_entries();
        assert!(lookup(&entries, "동네 맛집").is_none());
        assert!(lookup(&entries, "").is_none());
    }
}
