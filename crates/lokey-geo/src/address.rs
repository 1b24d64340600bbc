//! Address token parsing.
//!
//! Handles text that carries an actual administrative address fragment,
//! e.g. "경기도 광주시 태전동". City names match longest-first so that
//! "경기도" is never shadowed by the bare "경기", and district matching is
//! scoped to the text after the matched city to keep "광주시" (Gyeonggi)
//! apart from the metro city "광주".

use crate::Confidence;

/// The normalization map for one city: shorthand spellings to the
/// canonical name.
#[derive(Debug, Clone)]
pub struct CityEntry {
    /// Spellings accepted in address text, e.g. "서울시", "서울".
    pub spellings: Vec<String>,
    /// Canonical name.
    pub canonical: String,
    /// District spellings to canonical district names for this city.
    pub districts: Vec<(String, String)>,
}

/// Outcome of address parsing, before micro-area attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Canonical city.
    pub city: String,
    /// Canonical district; empty when no district token was found.
    pub district: String,
    /// Dong or myeon token, when present.
    pub dong: Option<String>,
    /// High with a district, medium with a city alone.
    pub confidence: Confidence,
}

/// Parses an address fragment out of free text.
///
/// Picks the earliest city occurrence, preferring longer spellings when
/// several match at the same position, then searches for a district only in
/// the text after the city token.
pub fn parse(cities: &[CityEntry], text: &str) -> Option<ParsedAddress> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize, &CityEntry)> = None;
    for entry in cities {
        for spelling in &entry.spellings {
            if let Some(index) = text.find(spelling.as_str()) {
                let better = match best {
                    None => true,
                    // Earlier position wins; at equal position the longer
                    // spelling wins ("경기도" over "경기").
                    Some((at, len, _)) => {
                        index < at || (index == at && spelling.len() > len)
                    }
                };
                if better {
                    best = Some((index, spelling.len(), entry));
                }
            }
        }
    }
    let (at, len, entry) = best?;

    let after_city = &text[at + len..];
    let mut district = String::new();
    // Longer district spellings first, so "광주시" beats "광주".
    let mut ordered: Vec<&(String, String)> = entry.districts.iter().collect();
    ordered.sort_by(|lhs, rhs| rhs.0.len().cmp(&lhs.0.len()));
    for (spelling, canonical) in ordered {
        if after_city.contains(spelling.as_str()) {
            district = canonical.clone();
            break;
        }
    }

    let confidence = if district.is_empty() {
        Confidence::Medium
    } else {
        Confidence::High
    };

    Some(ParsedAddress {
        city: entry.canonical.clone(),
        district,
        dong: extract_dong(text),
        confidence,
    })
}

/// Extracts the first dong (동) or myeon (면) token from text.
///
/// A token qualifies when it is all-Hangul, at least two characters, and
/// ends in 동 or 면 as a standalone word.
pub fn extract_dong(text: &str) -> Option<String> {
    for token in text.split_whitespace() {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 2 {
            continue;
        }
        let last = *chars.last()?;
        if (last == '동' || last == '면') && chars.iter().all(is_hangul) {
            return Some(token.to_string());
        }
    }
    None
}

/// Korean syllable block range.
fn is_hangul(ch: &char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(ch)
}

/// Builds the default city normalization table.
pub fn default_cities() -> Vec<CityEntry> {
    DEFAULT_CITIES
        .iter()
        .map(|(spellings, canonical)| CityEntry {
            spellings: spellings.iter().map(|name| (*name).to_string()).collect(),
            canonical: (*canonical).to_string(),
            districts: default_districts(canonical),
        })
        .collect()
}

fn default_districts(city: &str) -> Vec<(String, String)> {
    let rows: &[(&str, &str)] = match city {
        "서울" => SEOUL_DISTRICTS,
        "부산" => BUSAN_DISTRICTS,
        "경기" => GYEONGGI_DISTRICTS,
        _ => &[],
    };
    rows.iter()
        .map(|(spelling, canonical)| ((*spelling).to_string(), (*canonical).to_string()))
        .collect()
}

/// City spellings to canonical names. Suffixed forms ("경기도", "서울시")
/// sit alongside bare forms; position and length resolve conflicts at parse
/// time.
static DEFAULT_CITIES: &[(&[&str], &str)] = &[
    (&["서울시", "서울"], "서울"),
    (&["부산시", "부산"], "부산"),
    (&["대구시", "대구"], "대구"),
    (&["인천시", "인천"], "인천"),
    (&["광주시", "광주"], "광주"),
    (&["대전시", "대전"], "대전"),
    (&["울산시", "울산"], "울산"),
    (&["경기도", "경기"], "경기"),
    (&["강원도", "강원"], "강원"),
    (&["충청북도", "충북"], "충북"),
    (&["충청남도", "충남"], "충남"),
    (&["전라북도", "전북"], "전북"),
    (&["전라남도", "전남"], "전남"),
    (&["경상북도", "경북"], "경북"),
    (&["경상남도", "경남"], "경남"),
    (&["제주도", "제주"], "제주"),
];

static SEOUL_DISTRICTS: &[(&str, &str)] = &[
    ("강남구", "강남구"),
    ("강남", "강남구"),
    ("강동구", "강동구"),
    ("강동", "강동구"),
    ("강북구", "강북구"),
    ("강서구", "강서구"),
    ("관악구", "관악구"),
    ("관악", "관악구"),
    ("구로구", "구로구"),
    ("구로", "구로구"),
    ("노원구", "노원구"),
    ("도봉구", "도봉구"),
    ("동작구", "동작구"),
    ("마포구", "마포구"),
    ("마포", "마포구"),
    ("서대문구", "서대문구"),
    ("서초구", "서초구"),
    ("서초", "서초구"),
    ("성동구", "성동구"),
    ("성북구", "성북구"),
    ("송파구", "송파구"),
    ("송파", "송파구"),
    ("양천구", "양천구"),
    ("영등포구", "영등포구"),
    ("영등포", "영등포구"),
    ("용산구", "용산구"),
    ("용산", "용산구"),
    ("은평구", "은평구"),
    ("종로구", "종로구"),
    ("종로", "종로구"),
    ("중구", "중구"),
    ("중랑구", "중랑구"),
];

static BUSAN_DISTRICTS: &[(&str, &str)] = &[
    ("부산진구", "부산진구"),
    ("부산진", "부산진구"),
    ("해운대구", "해운대구"),
    ("해운대", "해운대구"),
    ("동래구", "동래구"),
    ("수영구", "수영구"),
    ("수영", "수영구"),
    ("금정구", "금정구"),
    ("사상구", "사상구"),
    ("사하구", "사하구"),
    ("영도구", "영도구"),
    ("연제구", "연제구"),
    ("남구", "남구"),
    ("동구", "동구"),
    ("서구", "서구"),
    ("북구", "북구"),
    ("중구", "중구"),
];

static GYEONGGI_DISTRICTS: &[(&str, &str)] = &[
    ("고양시", "고양시"),
    ("고양", "고양시"),
    ("광명시", "광명시"),
    ("광주시", "광주시"),
    ("광주", "광주시"),
    ("구리시", "구리시"),
    ("김포시", "김포시"),
    ("남양주시", "남양주시"),
    ("남양주", "남양주시"),
    ("동두천시", "동두천시"),
    ("부천시", "부천시"),
    ("부천", "부천시"),
    ("성남시", "성남시"),
    ("성남", "성남시"),
    ("수원시", "수원시"),
    ("수원", "수원시"),
    ("시흥시", "시흥시"),
    ("안산시", "안산시"),
    ("안산", "안산시"),
    ("안양시", "안양시"),
    ("안양", "안양시"),
    ("용인시", "용인시"),
    ("용인", "용인시"),
    ("의정부시", "의정부시"),
    ("의정부", "의정부시"),
    ("이천시", "이천시"),
    ("파주시", "파주시"),
    ("평택시", "평택시"),
    ("평택", "평택시"),
    ("하남시", "하남시"),
    ("하남", "하남시"),
    ("화성시", "화성시"),
    ("화성", "화성시"),
];
