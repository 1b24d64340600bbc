//! Tolerant extraction of candidate lists from model text.
//!
//! Model output is messy: fenced code blocks, prose before and after the
//! JSON, unknown tag strings. Parsing strips fences, takes the outermost
//! brace span, and drops anything it cannot account for rather than
//! failing the whole response.

use serde::Deserialize;

use crate::candidate::{CandidateKeyword, TypeTag};

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    keywords: Vec<RawKeyword>,
}

#[derive(Debug, Deserialize)]
struct RawKeyword {
    #[serde(default)]
    kw: String,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    estimated_sv: f64,
}

/// Parses candidate keywords out of free-form model text.
///
/// Returns `None` when no JSON object can be located or it fails to
/// deserialize. Entries with an empty phrase, or whose tags are all
/// unrecognized, are dropped; duplicate phrases keep the first occurrence.
pub fn parse_candidates(text: &str) -> Option<Vec<CandidateKeyword>> {
    let body = strip_fences(text);
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end < start {
        return None;
    }
    let raw: RawResponse = match serde_json::from_str(&body[start..=end]) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("discarding unparseable candidate response: {err}");
            return None;
        }
    };

    let mut out: Vec<CandidateKeyword> = Vec::new();
    for entry in raw.keywords {
        let phrase = entry.kw.trim();
        if phrase.is_empty() {
            continue;
        }
        let types: Vec<TypeTag> = entry
            .types
            .iter()
            .filter_map(|name| TypeTag::parse(name))
            .collect();
        if types.is_empty() {
            log::debug!("dropping untagged candidate {phrase:?}");
            continue;
        }
        if out.iter().any(|existing| existing.phrase == phrase) {
            continue;
        }
        out.push(CandidateKeyword::new(
            phrase.to_string(),
            types,
            entry.estimated_sv,
        ));
    }
    Some(out)
}

/// Removes markdown code fences, keeping their contents.
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_fenced_response() {
        let text = r#"물론입니다. 결과는 다음과 같습니다:
```json
{"keywords": [
  {"kw": "강남 카페", "types": ["location_category"], "estimated_sv": 1500},
  {"kw": "강남 카페 추천", "types": ["location_category_intent"], "estimated_sv": 900}
]}
```
도움이 되길 바랍니다."#;
        let candidates = parse_candidates(text).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].phrase, "강남 카페");
        assert_eq!(candidates[0].types, vec![TypeTag::LocationCategory]);
        assert_eq!(candidates[1].estimated_sv, 900.0);
    }

    #[test]
    fn drops_untagged_and_duplicate_entries() {
        let text = r#"{"keywords": [
            {"kw": "강남 카페", "types": ["location_category"], "estimated_sv": 1500},
            {"kw": "강남 카페", "types": ["location_category"], "estimated_sv": 100},
            {"kw": "이상한", "types": ["mystery_tag"], "estimated_sv": 50},
            {"kw": "  ", "types": ["brand"], "estimated_sv": 10}
        ]}"#;
        let candidates = parse_candidates(text).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].estimated_sv, 1500.0);
    }

    #[test]
    fn unknown_tags_are_filtered_not_fatal() {
        let text = r#"{"keywords": [
            {"kw": "역삼동 맛집", "types": ["dong_category", "made_up"], "estimated_sv": 400}
        ]}"#;
        let candidates = parse_candidates(text).unwrap();
        assert_eq!(candidates[0].types, vec![TypeTag::DongCategory]);
    }

    #[test]
    fn no_json_object_is_none() {
        assert!(parse_candidates("죄송합니다, 생성할 수 없습니다.").is_none());
        assert!(parse_candidates("").is_none());
    }

    #[test]
    fn malformed_json_is_none() {
        assert!(parse_candidates(r#"{"keywords": [{"kw": "#).is_none());
    }
}
