//! Candidate generation pipeline.
//!
//! A [`CandidateGenerator`] tries an optional model-backed
//! [`TextGenerator`] first and falls back to the deterministic rules in
//! [`crate::fallback`] whenever the model is missing, errors, or returns
//! nothing usable. The caller always gets candidates.

use thiserror::Error;

use crate::candidate::CandidateKeyword;
use crate::facets::BusinessFacets;
use crate::{fallback, parse};

/// Errors producing text from a generation backend.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The backend needs a credential that is not set.
    #[error("missing credential {name}")]
    MissingCredential {
        /// Environment variable name.
        name: String,
    },
    /// The HTTP request failed or returned a non-success status.
    #[error("request to {endpoint} failed: {reason}")]
    Request {
        /// Endpoint the request went to.
        endpoint: String,
        /// Transport or status description.
        reason: String,
    },
    /// The response body did not have the expected shape.
    #[error("malformed response from {endpoint}")]
    MalformedResponse {
        /// Endpoint the response came from.
        endpoint: String,
    },
}

/// A text generation backend.
///
/// Implementations turn a prompt into raw model text. They should not try
/// to shape the output; [`parse::parse_candidates`] handles that.
pub trait TextGenerator {
    /// Generates text for the given prompt.
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Generates candidate keywords for a business.
pub struct CandidateGenerator {
    primary: Option<Box<dyn TextGenerator>>,
}

impl CandidateGenerator {
    /// Creates a generator with an optional model backend.
    pub fn new(primary: Option<Box<dyn TextGenerator>>) -> Self {
        CandidateGenerator { primary }
    }

    /// Creates a generator that only uses the deterministic rules.
    pub fn rules_only() -> Self {
        CandidateGenerator { primary: None }
    }

    /// Produces candidates for the facets, never empty.
    pub fn generate(&self, facets: &BusinessFacets) -> Vec<CandidateKeyword> {
        if let Some(primary) = &self.primary {
            let prompt = candidate_prompt(facets);
            match primary.generate(&prompt) {
                Ok(text) => {
                    if let Some(candidates) = parse::parse_candidates(&text) {
                        if !candidates.is_empty() {
                            return candidates;
                        }
                        log::warn!("model returned no usable candidates, using rules");
                    } else {
                        log::warn!("model response had no candidate JSON, using rules");
                    }
                }
                Err(err) => {
                    log::warn!("candidate generation backend failed: {err}, using rules");
                }
            }
        }
        fallback::generate(facets)
    }
}

/// Builds the candidate generation prompt from facets.
fn candidate_prompt(facets: &BusinessFacets) -> String {
    let category = facets.primary_category();
    let items = facets.item_names().join(", ");
    let features = facets.features.join(", ");
    let audience = facets.audience.join(", ");
    let location = &facets.location;
    let dong = location.dong.as_deref().unwrap_or("없음");
    let micro_area = location.micro_area.as_deref().unwrap_or("없음");

    format!(
        "당신은 네이버 블로그 SEO 전문가입니다. 아래 가게 정보로 검색 키워드 후보 15~20개를 생성하세요.\n\
         \n\
         가게명: {name}\n\
         업종: {category}\n\
         주요 메뉴/서비스: {items}\n\
         특징: {features}\n\
         주요 고객층: {audience}\n\
         위치: {city} {district} / 동: {dong} / 세부 상권: {micro_area}\n\
         \n\
         키워드 형태 규칙:\n\
         1. 지역(시/구) + 업종 (예: 강남 카페)\n\
         2. 지역(시/구) + 메뉴/서비스 (예: 강남 스팀세차)\n\
         3. 동 + 업종, 동 + 메뉴/서비스 (동이 있을 때만)\n\
         4. 세부 상권 + 업종, 세부 상권 + 메뉴/서비스 (세부 상권이 있을 때만)\n\
         5. 메뉴/서비스 + 의도어 (추천, 예약, 주차, 빠른)\n\
         6. 동/세부 상권 + 메뉴/서비스 + 의도어\n\
         7. 특징 + 업종 (특징이 짧을 때만)\n\
         8. 브랜드명 단독, 브랜드명 + 동/구\n\
         \n\
         제외 규칙:\n\
         - 가게 위치와 다른 지역명 사용 금지\n\
         - 실제로 검색되지 않을 조합 금지\n\
         - 같은 키워드 반복 금지\n\
         \n\
         각 키워드에 타입 태그와 월간 검색량 추정치를 붙여 JSON만 출력하세요:\n\
         {{\"keywords\": [{{\"kw\": \"...\", \"types\": [\"location_category\"], \"estimated_sv\": 1500, \"reasoning\": \"...\"}}]}}",
        name = facets.place_name,
        city = location.city,
        district = location.district,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::candidate::TypeTag;

    struct FixedText(String);

    impl TextGenerator for FixedText {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Ok(self.0.clone())
        }
    }

    struct AlwaysFails;

    impl TextGenerator for AlwaysFails {
        fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
            Err(GenerateError::MissingCredential {
                name: "GEMINI_API_KEY".to_string(),
            })
        }
    }

    fn facets() -> BusinessFacets {
        BusinessFacets {
            place_name: "테스트카페".to_string(),
            category: vec!["카페".to_string()],
            ..BusinessFacets::default()
        }
    }

    #[test]
    fn uses_backend_when_it_parses() {
        let backend = FixedText(
            r#"{"keywords": [{"kw": "강남 카페", "types": ["location_category"], "estimated_sv": 1500}]}"#
                .to_string(),
        );
        let generator = CandidateGenerator::new(Some(Box::new(backend)));
        let candidates = generator.generate(&facets());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].types, vec![TypeTag::LocationCategory]);
    }

    #[test]
    fn backend_failure_falls_back_to_rules() {
        let generator = CandidateGenerator::new(Some(Box::new(AlwaysFails)));
        let candidates = generator.generate(&facets());
        assert!(!candidates.is_empty());
        assert!(candidates.iter().any(|candidate| candidate.phrase == "테스트카페"));
    }

    #[test]
    fn garbage_backend_output_falls_back_to_rules() {
        let generator =
            CandidateGenerator::new(Some(Box::new(FixedText("생성 불가".to_string()))));
        let candidates = generator.generate(&facets());
        assert!(!candidates.is_empty());
    }

    #[test]
    fn rules_only_never_empty() {
        let generator = CandidateGenerator::rules_only();
        assert!(!generator.generate(&BusinessFacets::default()).is_empty());
    }

    #[test]
    fn prompt_carries_facets() {
        let prompt = candidate_prompt(&facets());
        assert!(prompt.contains("테스트카페"));
        assert!(prompt.contains("카페"));
        assert!(prompt.contains("추천, 예약, 주차, 빠른"));
    }
}
