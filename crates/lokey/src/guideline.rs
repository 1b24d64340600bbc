//! Templated blog-writing guidelines.
//!
//! Guidelines are fully templated: four fixed tone styles, each with an
//! intro, writing tips and example phrasings, assembled around the caller's
//! keywords. No model call is involved, so the output is instant and
//! deterministic.

/// Writing tone for a guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// 실사 리뷰 톤 — honest first-hand review voice.
    Review,
    /// 전문가 톤 — analytical industry voice.
    Expert,
    /// 친근한 톤 — warm conversational voice.
    Friendly,
    /// 데이터 톤 — numbers-first voice.
    Data,
}

impl Tone {
    /// Parses a tone name, falling back to the review tone.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "전문가 톤" => Tone::Expert,
            "친근한 톤" => Tone::Friendly,
            "데이터 톤" => Tone::Data,
            _ => Tone::Review,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Tone::Review => "실사 리뷰 톤",
            Tone::Expert => "전문가 톤",
            Tone::Friendly => "친근한 톤",
            Tone::Data => "데이터 톤",
        }
    }
}

struct ToneStyle {
    intro: String,
    style: &'static str,
    tips: [&'static str; 5],
    examples: [String; 3],
}

fn tone_style(tone: Tone, main_keyword: &str) -> ToneStyle {
    match tone {
        Tone::Review => ToneStyle {
            intro: format!(
                "\"{main_keyword}\"로 검색하는 사용자는 실제 경험과 정직한 평가를 원합니다."
            ),
            style: "구체적인 경험, 장단점 균형, 신뢰도 높은 표현",
            tips: [
                "방문 전 기대와 실제 경험의 차이점 언급",
                "가격대비 가치에 대한 객관적 평가",
                "재방문 의사 표현 및 추천 대상 명시",
                "구체적인 제품명/메뉴명/서비스명 기재",
                "사진 첨부로 신뢰도 높이기",
            ],
            examples: [
                format!("\"{main_keyword}는 예상과 다르게 매우 만족스러웠다\""),
                format!("\"{main_keyword}를 추천하는 이유는 무엇보다 [구체적 이유] 때문이다\""),
                format!("\"{main_keyword}의 단점은 [솔직한 평가]이지만, 이 정도는 감수할 만하다\""),
            ],
        },
        Tone::Expert => ToneStyle {
            intro: format!(
                "\"{main_keyword}\"에 대한 전문적이고 깊이 있는 분석을 제시합니다."
            ),
            style: "업계 지식, 비교 분석, 전문용어 활용, 데이터 기반 평가",
            tips: [
                "비슷한 경쟁사와의 차별점 분석",
                "품질/서비스 수준에 대한 객관적 평가",
                "트렌드와의 연관성 분석",
                "개선점 및 시사점 제시",
                "산업 전체 맥락에서의 위치 파악",
            ],
            examples: [
                format!("\"{main_keyword}는 시장에서 [포지셔닝]을 차지하고 있다\""),
                format!("\"{main_keyword}의 경쟁력은 [구체적 이유]에 있다\""),
                format!("\"{main_keyword}는 다음과 같은 측면에서 개선이 필요하다\""),
            ],
        },
        Tone::Friendly => ToneStyle {
            intro: format!("\"{main_keyword}\"에 대해 친근하고 따뜻하게 이야기합니다."),
            style: "감정 표현, 공감, 쉬운 설명, 유머 포함",
            tips: [
                "개인적 경험과 감정 솔직히 나누기",
                "공감할 수 있는 상황 묘사",
                "방문객층/타겟 설정 및 추천",
                "직관적이고 따뜻한 표현 사용",
                "일상의 소소한 재미 강조",
            ],
            examples: [
                format!("\"{main_keyword}에 가면 정말 좋은 점이 있어요\""),
                format!("\"{main_keyword}는 [감정표현]한 경험이었어요\""),
                format!("\"{main_keyword}를 놓치면 정말 아깝다고 생각해요\""),
            ],
        },
        Tone::Data => ToneStyle {
            intro: format!(
                "\"{main_keyword}\"에 대한 객관적 데이터와 수치를 바탕으로 분석합니다."
            ),
            style: "수치화, 통계, 비교표, 객관성 강조",
            tips: [
                "구체적인 수치와 통계 제시",
                "비용 대비 효과 계산",
                "방문객 수, 만족도 등 정량 평가",
                "시간대/계절별 변화 분석",
                "객관적 지표로 순위 매기기",
            ],
            examples: [
                format!("\"{main_keyword}의 평균 평점은 [수치]로 [해석]\""),
                format!("\"{main_keyword} 방문객은 주로 [데이터]로 집계된다\""),
                format!("\"{main_keyword}의 가성비는 동급사 대비 [비교]\""),
            ],
        },
    }
}

/// Assembles the markdown guideline for the keywords in the given tone.
///
/// The first keyword anchors the guideline; the rest are listed as
/// secondary. An empty list falls back to a generic search anchor.
pub fn generate(keywords: &[String], tone: Tone) -> String {
    let main_keyword = keywords.first().map_or("검색", String::as_str);
    let style = tone_style(tone, main_keyword);
    let keyword_list = if keywords.is_empty() {
        main_keyword.to_string()
    } else {
        keywords.join(", ")
    };
    let tips = style
        .tips
        .iter()
        .enumerate()
        .map(|(idx, tip)| format!("{}. {tip}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n");
    let examples = style
        .examples
        .iter()
        .enumerate()
        .map(|(idx, example)| format!("{}. {example}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "## 가이드라인 소개\n\
         {intro}\n\
         \n\
         주요 키워드: {keyword_list}\n\
         \n\
         ---\n\
         \n\
         ## 검색 의도 분석\n\
         사용자가 \"{main_keyword}\"로 검색할 때 알고 싶은 것:\n\
         - 실제 경험담과 솔직한 평가\n\
         - 다른 유사 서비스와의 차이점\n\
         - 자신에게 맞는지 여부\n\
         - 방문/이용할 가치가 있는지 판단 자료\n\
         \n\
         ---\n\
         \n\
         ## 콘텐츠 작성 팁\n\
         **톤**: {tone_name}\n\
         **스타일**: {style_line}\n\
         \n\
         다음 요소들을 포함해주세요:\n\
         {tips}\n\
         \n\
         ---\n\
         \n\
         ## 작성 체크리스트\n\
         - [ ] 방문/이용 시간 및 계절 명시\n\
         - [ ] 주요 메뉴/서비스 3가지 이상 구체적 언급\n\
         - [ ] 가격대 명시 (예: 1인 기준 ~원)\n\
         - [ ] 주차, 예약, 운영시간 등 실용 정보\n\
         - [ ] 대상 고객층 명확히 설정\n\
         - [ ] 장점 3가지 이상 구체적 설명\n\
         - [ ] 단점이나 개선점도 균형있게 언급\n\
         - [ ] 마지막에 재방문/추천 의사 표현\n\
         - [ ] 사진 또는 영상 첨부\n\
         - [ ] 타이틀에 핵심 정보 포함\n\
         \n\
         ---\n\
         \n\
         ## 표현 예시\n\
         다음과 같은 표현을 활용해보세요:\n\
         \n\
         {examples}\n\
         \n\
         좀 더 구체적인 표현:\n\
         - \"실제로 {main_keyword} 방문 후 느낀 점은...\"\n\
         - \"{main_keyword}가 다른 곳과 다른 이유는...\"\n\
         - \"{main_keyword}를 추천하는 사람들의 이유는...\"\n\
         - \"{main_keyword}의 숨은 매력은...\"\n\
         \n\
         ---\n\
         \n\
         ## 블로그 SEO 최적화 팁\n\
         - 제목에 \"{main_keyword}\" 반드시 포함\n\
         - 본문에 관련 키워드 자연스럽게 3-5회 언급\n\
         - 소제목(H2, H3)으로 구조화\n\
         - 단락은 3-4문장 이하로 간결하게\n\
         - 강조가 필요한 부분은 **굵게** 표시\n\
         - 리스트나 표로 정보 시각화",
        intro = style.intro,
        tone_name = tone.name(),
        style_line = style.style,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_tone_defaults_to_review() {
        assert_eq!(Tone::parse("모르는 톤"), Tone::Review);
        assert_eq!(Tone::parse("데이터 톤"), Tone::Data);
    }

    #[test]
    fn guideline_anchors_on_first_keyword() {
        let keywords = vec!["강남 카페".to_string(), "강남 카페 추천".to_string()];
        let rendered = generate(&keywords, Tone::Review);
        assert!(rendered.contains("\"강남 카페\"로 검색하는 사용자"));
        assert!(rendered.contains("주요 키워드: 강남 카페, 강남 카페 추천"));
        assert!(rendered.contains("## 블로그 SEO 최적화 팁"));
    }

    #[test]
    fn empty_keywords_use_generic_anchor() {
        let rendered = generate(&[], Tone::Friendly);
        assert!(rendered.contains("\"검색\"에 대해"));
    }

    #[test]
    fn each_tone_has_distinct_style_line() {
        let keywords = vec!["헬스장".to_string()];
        let review = generate(&keywords, Tone::Review);
        let data = generate(&keywords, Tone::Data);
        assert!(review.contains("장단점 균형"));
        assert!(data.contains("수치화, 통계"));
        assert_ne!(review, data);
    }
}
