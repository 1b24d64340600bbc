//! Dong characteristic profiles.
//!
//! Each profiled dong carries characteristic labels (new town, old town,
//! commercial hub, ...) and target demographics. The evaluator turns the
//! labels into demand and competition adjustments: a tourist dong gets a
//! big demand uplift, an industrial one a competition discount.

use std::collections::HashMap;

use serde::Serialize;

/// Urban character of a dong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DongCharacteristic {
    /// 신도시 — recently developed, modern housing stock.
    NewTown,
    /// 구도심 — established old town, traditional commerce.
    OldTown,
    /// 상업중심 — storefront and restaurant dense.
    CommercialHub,
    /// 주거중심 — apartment-dominated residential.
    Residential,
    /// 관광지 — visitor-driven, seasonal swings.
    Tourist,
    /// 산업/항만 — factory and port zones.
    Industrial,
    /// 교육지구 — university and hagwon dense.
    Education,
    /// 문화지구 — arts and culture oriented.
    Cultural,
}

/// Profile of one dong.
#[derive(Debug, Clone)]
pub struct DongProfile {
    /// Characteristic labels, possibly several.
    pub characteristics: Vec<DongCharacteristic>,
    /// Who the dong's foot traffic is ("직장인", "관광객", ...).
    pub target_demographics: Vec<String>,
}

/// Percentage adjustments derived from a dong's characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacteristicAdjustments {
    /// Added to estimated competition; negative means less contested.
    pub competition: i64,
    /// Percentage applied to adjusted search volume.
    pub demand: i64,
}

impl DongProfile {
    /// Sums the per-characteristic demand/competition adjustments.
    pub fn adjustments(&self) -> CharacteristicAdjustments {
        let mut total = CharacteristicAdjustments::default();
        for characteristic in &self.characteristics {
            let (competition, demand) = match characteristic {
                DongCharacteristic::NewTown => (-10, 20),
                DongCharacteristic::OldTown => (5, -10),
                DongCharacteristic::CommercialHub => (20, 30),
                DongCharacteristic::Residential => (-5, 10),
                DongCharacteristic::Tourist => (10, 40),
                DongCharacteristic::Industrial => (-15, 5),
                DongCharacteristic::Education => (-5, 25),
                // Cultural carries no demand model yet.
                DongCharacteristic::Cultural => (0, 0),
            };
            total.competition += competition;
            total.demand += demand;
        }
        total
    }

    /// True when the dong carries the given characteristic.
    pub fn has(&self, characteristic: DongCharacteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }
}

/// Lookup of dong profiles by (city, district, dong).
#[derive(Debug, Clone, Default)]
pub struct DongDb {
    entries: HashMap<(String, String, String), DongProfile>,
}

impl DongDb {
    /// Builds a database from explicit rows.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ((String, String, String), DongProfile)>,
    {
        Self {
            entries: rows.into_iter().collect(),
        }
    }

    /// Returns the profile for a dong, when one is on file.
    pub fn profile(&self, city: &str, district: &str, dong: &str) -> Option<&DongProfile> {
        self.entries
            .get(&(city.to_string(), district.to_string(), dong.to_string()))
    }
}

/// Builds the default dong profile database.
pub fn default_db() -> DongDb {
    use DongCharacteristic::{
        CommercialHub, Cultural, Education, Industrial, NewTown, OldTown, Residential, Tourist,
    };

    #[allow(clippy::type_complexity)]
    let rows: &[(&str, &str, &str, &[DongCharacteristic], &[&str])] = &[
        // 서울 강남구
        ("서울", "강남구", "강남동", &[CommercialHub], &["직장인", "청년", "외국인"]),
        ("서울", "강남구", "논현동", &[CommercialHub, OldTown], &["직장인", "청년"]),
        ("서울", "강남구", "삼성동", &[CommercialHub, Tourist], &["직장인", "관광객"]),
        ("서울", "강남구", "역삼동", &[CommercialHub], &["직장인", "청년", "학생"]),
        ("서울", "강남구", "대치동", &[Residential], &["가족", "학생"]),
        ("서울", "강남구", "청담동", &[CommercialHub, Residential], &["청년", "가족"]),
        // 서울 송파구
        ("서울", "송파구", "잠실동", &[NewTown, CommercialHub], &["가족", "관광객", "청년"]),
        ("서울", "송파구", "석촌동", &[Tourist, CommercialHub], &["가족", "관광객"]),
        // 서울 마포구
        ("서울", "마포구", "홍대입구동", &[CommercialHub, Cultural], &["청년", "대학생", "관광객"]),
        ("서울", "마포구", "서교동", &[CommercialHub], &["청년", "예술가"]),
        // 서울 기타
        ("서울", "중구", "명동동", &[CommercialHub, Tourist], &["관광객", "청년", "외국인"]),
        ("서울", "종로구", "종로동", &[OldTown, Tourist], &["관광객", "노년"]),
        ("서울", "종로구", "인사동", &[CommercialHub, Cultural], &["관광객", "예술가"]),
        ("서울", "용산구", "이태원동", &[CommercialHub, Tourist], &["외국인", "청년", "관광객"]),
        ("서울", "성동구", "성수동", &[CommercialHub, Cultural], &["청년", "예술가"]),
        ("서울", "관악구", "신림동", &[Education, CommercialHub], &["대학생", "학생"]),
        ("서울", "금천구", "가산동", &[Industrial], &["직장인"]),
        // 경기 광주시
        ("경기", "광주시", "태전동", &[NewTown, Residential], &["가족", "영유아"]),
        ("경기", "광주시", "신동", &[NewTown, CommercialHub], &["가족", "청년"]),
        ("경기", "광주시", "광주동", &[OldTown], &["노년", "혼합"]),
        // 부산
        ("부산", "부산진구", "부전동", &[CommercialHub], &["청년", "대학생"]),
        ("부산", "남구", "용호동", &[Tourist, CommercialHub], &["관광객", "가족"]),
        ("부산", "해운대구", "우동", &[NewTown, CommercialHub], &["직장인", "가족"]),
        ("부산", "해운대구", "중동", &[Tourist, NewTown], &["관광객", "가족"]),
        // 인천/대전
        ("인천", "연수구", "송도동", &[NewTown], &["직장인", "가족"]),
        ("대전", "유성구", "대학동", &[Education, NewTown], &["학생", "대학생"]),
        ("대전", "유성구", "봉명동", &[Tourist], &["관광객", "가족"]),
    ];

    DongDb::from_rows(rows.iter().map(
        |(city, district, dong, characteristics, demographics)| {
            (
                (
                    (*city).to_string(),
                    (*district).to_string(),
                    (*dong).to_string(),
                ),
                DongProfile {
                    characteristics: characteristics.to_vec(),
                    target_demographics: demographics
                        .iter()
                        .map(|group| (*group).to_string())
                        .collect(),
                },
            )
        },
    ))
}
