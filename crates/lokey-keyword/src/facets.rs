//! Business facets.
//!
//! Facets are the structured description of a business: categories, menu
//! items, audience, features, vibe, price range, and a resolved location.
//! They come from an external text generator when one is available and from
//! a keyword heuristic otherwise; either way the result is normalized once
//! at ingestion so downstream code never sees loose shapes.

use lokey_geo::LocationFacts;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A menu item or service the business offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Item name, e.g. "스팀세차".
    pub name: String,
    /// Whether the business flags this as its signature offering.
    pub signature: bool,
}

// Generators answer with either a bare string or an object; both normalize
// to a MenuItem at the boundary.
impl<'de> Deserialize<'de> for MenuItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Full {
                name: String,
                #[serde(default)]
                signature: bool,
            },
        }
        match Raw::deserialize(deserializer)? {
            Raw::Name(name) if name.is_empty() => {
                Err(de::Error::custom("menu item name must not be empty"))
            }
            Raw::Name(name) => Ok(Self {
                name,
                signature: false,
            }),
            Raw::Full { name, signature } => Ok(Self { name, signature }),
        }
    }
}

/// Structured description of a business.
///
/// Read-only input to keyword generation; built once per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessFacets {
    /// Business name.
    #[serde(default)]
    pub place_name: String,
    /// Business categories, primary first.
    #[serde(default)]
    pub category: Vec<String>,
    /// Menu items or services.
    #[serde(default)]
    pub items: Vec<MenuItem>,
    /// Target audience groups.
    #[serde(default)]
    pub audience: Vec<String>,
    /// Distinguishing features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Atmosphere descriptors.
    #[serde(default)]
    pub vibe: Vec<String>,
    /// Price band: 저가, 중가, 고가 or 프리미엄.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    /// Resolved location.
    #[serde(default = "LocationFacts::unresolved")]
    pub location: LocationFacts,
}

impl BusinessFacets {
    /// Primary category, or a generic placeholder for scoring purposes.
    pub fn primary_category(&self) -> &str {
        self.category.first().map_or("가게", String::as_str)
    }

    /// Item names, in declared order.
    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

/// Keyword-heuristic facet extraction, used when no generator output is
/// available. Scans the combined text against small category, price, and
/// menu tables.
pub fn extract_heuristic(place_name: &str, description: &str) -> BusinessFacets {
    let text = format!("{place_name} {description}").to_lowercase();

    let mut category: Vec<String> = Vec::new();
    for (keywords, name) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            category.push((*name).to_string());
        }
    }
    if category.is_empty() {
        category.push("기타".to_string());
    }

    let price_range = PRICE_KEYWORDS.iter().find_map(|(keywords, band)| {
        keywords
            .iter()
            .any(|keyword| text.contains(keyword))
            .then(|| (*band).to_string())
    });

    let items = MENU_KEYWORDS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, name)| MenuItem {
            name: (*name).to_string(),
            signature: true,
        })
        .collect();

    BusinessFacets {
        place_name: place_name.trim().to_string(),
        category,
        items,
        price_range,
        location: LocationFacts::unresolved(),
        ..BusinessFacets::default()
    }
}

/// Facet extraction that tries a model backend first.
///
/// Falls back to [`extract_heuristic`] when the backend errors or answers
/// with something unparsable. The returned location is always unresolved;
/// the caller attaches the resolver's result.
pub fn extract(
    backend: Option<&dyn crate::generate::TextGenerator>,
    place_name: &str,
    description: &str,
) -> BusinessFacets {
    if let Some(backend) = backend {
        match backend.generate(&facets_prompt(place_name, description)) {
            Ok(text) => {
                if let Some(mut facets) = parse_facets(&text) {
                    if facets.place_name.is_empty() {
                        facets.place_name = place_name.trim().to_string();
                    }
                    facets.location = LocationFacts::unresolved();
                    return facets;
                }
                log::warn!("facet response had no usable JSON, using heuristics");
            }
            Err(err) => log::warn!("facet extraction backend failed: {err}, using heuristics"),
        }
    }
    extract_heuristic(place_name, description)
}

/// Builds the facet extraction prompt.
fn facets_prompt(place_name: &str, description: &str) -> String {
    format!(
        "다음 가게 정보를 분석해 구조화된 JSON만 출력하세요.\n\
         \n\
         가게명: {place_name}\n\
         설명: {description}\n\
         \n\
         출력 형식:\n\
         {{\"place_name\": \"...\", \"category\": [\"업종\"], \"items\": [{{\"name\": \"메뉴/서비스\", \"signature\": true}}],\n\
          \"audience\": [\"고객층\"], \"features\": [\"특징\"], \"vibe\": [\"분위기\"], \"price_range\": \"저가|중가|고가\"}}\n\
         \n\
         설명에 없는 정보는 추측하지 말고 빈 배열로 두세요."
    )
}

/// Parses facets out of free-form model text, `None` when no JSON object
/// is found or it fails to deserialize.
pub fn parse_facets(text: &str) -> Option<BusinessFacets> {
    let body = text.replace("```json", "").replace("```", "");
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&body[start..=end]).ok()
}

/// Category inference table: any keyword implies the category.
static CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["카페", "커피", "브런치", "아메리카노", "라떼", "에스프레소"], "카페"),
    (
        &["음식점", "식당", "라면", "국수", "초밥", "스시", "피자", "햄버거", "치킨"],
        "음식점",
    ),
    (&["세차", "세차장", "스팀", "광택", "손세차"], "세차장"),
    (&["헬스", "피트니스", "요가", "필라테스", "운동"], "헬스"),
    (&["미용", "헤어", "매니큐어", "페디큐어", "에스테틱"], "미용"),
    (&["주점", "호프", "펍", "칵테일"], "주점"),
    (&["숙박", "호텔", "모텔", "게스트하우스", "펜션"], "숙박"),
    (&["병원", "의원", "클리닉", "치과", "한의원", "약국"], "의료"),
    (&["학원", "어학", "영어", "수학", "과외", "교육"], "학원"),
];

/// Price band inference table.
static PRICE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["저가", "저렴", "가성비", "천원"], "저가"),
    (&["중가", "보통", "만원"], "중가"),
    (&["고가", "비싼", "고급", "프리미엄"], "고가"),
];

/// Signature menu inference table.
static MENU_KEYWORDS: &[(&[&str], &str)] = &[
    (&["아메리카노", "라떼", "카페라떼"], "커피"),
    (&["파스타", "리소또"], "이탈리안"),
    (&["스테이크", "구이"], "고기"),
    (&["초밥", "오마카세"], "일식"),
    (&["스팀세차"], "스팀세차"),
    (&["광택"], "광택"),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn heuristic_detects_category_and_items() {
        let facets = extract_heuristic("태전동 스팀세차", "광택 전문, 가성비 좋은 손세차");
        assert_eq!(facets.category, vec!["세차장"]);
        let names = facets.item_names();
        assert!(names.contains(&"스팀세차"));
        assert!(names.contains(&"광택"));
        assert_eq!(facets.price_range.as_deref(), Some("저가"));
    }

    #[test]
    fn heuristic_falls_back_to_generic_category() {
        let facets = extract_heuristic("동네 가게", "그냥 잡화를 팝니다");
        assert_eq!(facets.category, vec!["기타"]);
        assert!(facets.items.is_empty());
    }

    #[test]
    fn parse_facets_tolerates_fenced_output() {
        let text = "분석 결과:\n```json\n{\"place_name\": \"모모카페\", \"category\": [\"카페\"], \"items\": [\"라떼\"]}\n```";
        let facets = parse_facets(text).unwrap();
        assert_eq!(facets.place_name, "모모카페");
        assert_eq!(facets.items[0].name, "라떼");
        assert!(parse_facets("JSON이 없습니다").is_none());
    }

    #[test]
    fn extract_falls_back_without_backend() {
        let facets = extract(None, "모모카페", "라떼가 맛있는 카페");
        assert_eq!(facets.category, vec!["카페"]);
    }

    #[test]
    fn menu_items_accept_both_wire_shapes() {
        let items: Vec<MenuItem> =
            serde_json::from_str(r#"["커피", {"name": "브런치", "signature": true}]"#).unwrap();
        assert_eq!(items[0].name, "커피");
        assert!(!items[0].signature);
        assert!(items[1].signature);
    }
}
