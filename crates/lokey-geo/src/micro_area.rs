//! Micro-area (commercial zone) database.
//!
//! A micro-area is a named commercial zone finer-grained than a dong:
//! "태전지구", "홍대 앞", "테헤란로". Zones are keyed by
//! city/district/dong; a name may legitimately repeat across dongs (강남역
//! spans 강남구 and 서초구), which is exactly why the adjacency guard
//! exists.

use std::collections::HashMap;

use crate::Confidence;

/// Commercial zones registered for one dong.
#[derive(Debug, Clone)]
pub struct MicroAreaInfo {
    /// Zone names, most canonical first.
    pub micro_areas: Vec<String>,
    /// How reliably these zones belong to this dong and no sibling.
    pub confidence: Confidence,
}

/// Lookup of commercial zones by (city, district, dong).
#[derive(Debug, Clone, Default)]
pub struct MicroAreaDb {
    entries: HashMap<(String, String, String), MicroAreaInfo>,
}

impl MicroAreaDb {
    /// Builds a database from explicit rows. Used by tests to substitute
    /// alternate tables.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ((String, String, String), MicroAreaInfo)>,
    {
        Self {
            entries: rows.into_iter().collect(),
        }
    }

    /// Returns the primary zone name for a dong, only when the mapping is
    /// high-confidence. Low- and medium-confidence zones stay out of
    /// resolved locations to avoid bleeding a sibling dong's zone name in.
    pub fn primary(&self, city: &str, district: &str, dong: &str) -> Option<&str> {
        let info = self.get(city, district, dong)?;
        if info.confidence != Confidence::High {
            return None;
        }
        info.micro_areas.first().map(String::as_str)
    }

    /// Returns all zone names for a dong regardless of confidence.
    pub fn all(&self, city: &str, district: &str, dong: &str) -> &[String] {
        self.get(city, district, dong)
            .map_or(&[], |info| info.micro_areas.as_slice())
    }

    fn get(&self, city: &str, district: &str, dong: &str) -> Option<&MicroAreaInfo> {
        self.entries
            .get(&(city.to_string(), district.to_string(), dong.to_string()))
    }

    /// Adjacency-collision guard.
    ///
    /// Returns true when `phrase` contains a zone name that is registered
    /// under a *different* dong of the same district and not also under the
    /// target dong. Such a phrase targets a sibling dong's commercial zone
    /// and must be dropped from evaluation.
    pub fn phrase_conflicts(
        &self,
        phrase: &str,
        city: &str,
        district: &str,
        target_dong: Option<&str>,
    ) -> bool {
        // Without a known target dong there is nothing to collide with.
        let Some(target) = target_dong else {
            return false;
        };
        let own_zones = self.all(city, district, target);
        for ((entry_city, entry_district, entry_dong), info) in &self.entries {
            if entry_city != city || entry_district != district {
                continue;
            }
            if target == entry_dong.as_str() {
                continue;
            }
            for zone in &info.micro_areas {
                if phrase.contains(zone.as_str())
                    && !own_zones.iter().any(|own| own == zone)
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Builds the default micro-area database.
pub fn default_db() -> MicroAreaDb {
    MicroAreaDb::from_rows(DEFAULT_MICRO_AREAS.iter().map(
        |(city, district, dong, zones, confidence)| {
            (
                (
                    (*city).to_string(),
                    (*district).to_string(),
                    (*dong).to_string(),
                ),
                MicroAreaInfo {
                    micro_areas: zones.iter().map(|zone| (*zone).to_string()).collect(),
                    confidence: *confidence,
                },
            )
        },
    ))
}

/// (city, district, dong, zones, confidence).
///
/// 경기 광주시 carries deliberately collision-prone data: 신도시 zones
/// belong to 신동, the old town to 광주동, and 태전지구 to 태전동.
#[allow(clippy::type_complexity)]
static DEFAULT_MICRO_AREAS: &[(&str, &str, &str, &[&str], Confidence)] = &[
    // 경기 광주시
    ("경기", "광주시", "태전동", &["태전지구"], Confidence::High),
    ("경기", "광주시", "신동", &["광주신도시", "신도시"], Confidence::High),
    ("경기", "광주시", "광주동", &["구광주", "광주 구도심"], Confidence::High),
    ("경기", "광주시", "경안동", &["경안동"], Confidence::Medium),
    ("경기", "광주시", "퇴촌면", &["남서울"], Confidence::Medium),
    // 경기 성남시/용인시
    ("경기", "성남시", "분당동", &["분당신도시", "정자역"], Confidence::High),
    ("경기", "용인시", "수지구", &["용인신도시", "수지"], Confidence::High),
    // 서울 강남구
    ("서울", "강남구", "강남동", &["강남역", "강남 중심부"], Confidence::High),
    ("서울", "강남구", "논현동", &["강남역", "논현거리"], Confidence::High),
    ("서울", "강남구", "삼성동", &["코엑스", "삼성"], Confidence::High),
    ("서울", "강남구", "역삼동", &["테헤란로", "역삼"], Confidence::High),
    ("서울", "강남구", "대치동", &["대치", "압구정"], Confidence::High),
    ("서울", "강남구", "청담동", &["청담", "압구정로"], Confidence::High),
    ("서울", "강남구", "개포동", &["개포"], Confidence::Medium),
    // 서울 송파구
    ("서울", "송파구", "잠실동", &["잠실신도시", "롯데월드"], Confidence::High),
    ("서울", "송파구", "석촌동", &["롯데월드", "석촌"], Confidence::High),
    ("서울", "송파구", "가락동", &["가락시장"], Confidence::Medium),
    // 서울 마포구
    ("서울", "마포구", "홍대입구동", &["홍대", "홍대 앞"], Confidence::High),
    ("서울", "마포구", "서교동", &["홍대", "상수"], Confidence::High),
    ("서울", "마포구", "동교동", &["홍대", "망원"], Confidence::High),
    // 서울 기타
    ("서울", "중구", "명동동", &["명동", "명동거리"], Confidence::High),
    ("서울", "서초구", "서초동", &["서초", "강남역"], Confidence::High),
    ("서울", "종로구", "종로동", &["종로", "조계사"], Confidence::High),
    ("서울", "종로구", "인사동", &["인사동", "낙원상가"], Confidence::High),
    ("서울", "용산구", "이태원동", &["이태원", "한강로"], Confidence::High),
    ("서울", "성동구", "성수동", &["성수", "성수벽화마을"], Confidence::High),
    ("서울", "관악구", "신림동", &["신림", "학생거리"], Confidence::High),
    ("서울", "금천구", "가산동", &["가산디지털단지"], Confidence::High),
    ("서울", "강서구", "화곡동", &["화곡"], Confidence::Low),
    // 부산
    ("부산", "부산진구", "부전동", &["부산진", "전포"], Confidence::High),
    ("부산", "부산진구", "동천동", &["서면"], Confidence::High),
    ("부산", "해운대구", "우동", &["우동", "센텀"], Confidence::High),
    ("부산", "해운대구", "중동", &["해운대", "마린시티"], Confidence::High),
    ("부산", "남구", "용호동", &["광안리", "광안"], Confidence::High),
    // 인천
    ("인천", "연수구", "송도동", &["송도신도시", "송도"], Confidence::High),
    ("인천", "중구", "신포동", &["차이나타운", "신포"], Confidence::High),
    // 대구/대전/광주/울산
    ("대구", "중구", "중앙동", &["대구역", "동성로"], Confidence::High),
    ("대전", "유성구", "대학동", &["대전대학교", "과학로"], Confidence::High),
    ("대전", "유성구", "봉명동", &["유성온천", "온천"], Confidence::High),
    ("광주", "동구", "금남로동", &["광주역", "금남로"], Confidence::High),
    ("울산", "중구", "태화동", &["울산역", "중앙로"], Confidence::High),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn primary_requires_high_confidence() {
        let db = default_db();
        assert_eq!(db.primary("경기", "광주시", "태전동"), Some("태전지구"));
        // Medium-confidence rows are not surfaced as resolved zones.
        assert_eq!(db.primary("경기", "광주시", "경안동"), None);
        assert_eq!(db.primary("경기", "광주시", "없는동"), None);
    }

    #[test]
    fn sibling_dong_zone_conflicts() {
        let db = default_db();
        // 신도시 belongs to 신동, not 태전동.
        assert!(db.phrase_conflicts("광주 신도시 카페", "경기", "광주시", Some("태전동")));
        // The target dong's own zone never conflicts.
        assert!(!db.phrase_conflicts("태전지구 카페", "경기", "광주시", Some("태전동")));
        // The zone's own dong is allowed to use it.
        assert!(!db.phrase_conflicts("신도시 카페", "경기", "광주시", Some("신동")));
    }

    #[test]
    fn shared_zone_across_dongs_is_not_a_conflict() {
        let db = default_db();
        // 강남역 is registered under both 강남동 and 논현동; either dong may
        // reference it.
        assert!(!db.phrase_conflicts("강남역 맛집", "서울", "강남구", Some("논현동")));
    }

    #[test]
    fn no_dong_means_no_guard() {
        let db = default_db();
        assert!(!db.phrase_conflicts("신도시 카페", "경기", "광주시", None));
    }
}
