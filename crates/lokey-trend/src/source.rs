//! News signal sources.
//!
//! The production source is the Naver news search API, which returns a
//! total match count and a handful of recent titles. The trait seam lets
//! tests substitute canned signals.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const ENDPOINT: &str = "https://openapi.naver.com/v1/search/news.json";
const CLIENT_ID_VAR: &str = "NAVER_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "NAVER_CLIENT_SECRET";

/// Title words too generic to tell the reader anything about the topic.
static TITLE_STOPWORDS: &[&str] = &["뉴스", "기사", "관련", "최근", "전문가"];

/// Errors fetching a news signal.
#[derive(Debug, Error)]
pub enum TrendError {
    /// A required credential is not set in the environment.
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

/// The raw signal for one keyword: how much coverage, and what the
/// coverage is about.
#[derive(Debug, Clone)]
pub struct NewsSignal {
    /// Total matching articles.
    pub total: u64,
    /// Recent article titles, possibly with HTML markup.
    pub titles: Vec<String>,
}

/// A source of news signals.
pub trait NewsSource {
    /// Fetches the signal for a keyword.
    fn fetch(&self, keyword: &str) -> Result<NewsSignal, TrendError>;
}

#[derive(Deserialize)]
struct NaverResponse {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    items: Vec<NaverItem>,
}

#[derive(Deserialize)]
struct NaverItem {
    #[serde(default)]
    title: String,
}

/// News signals from the Naver search API.
///
/// Credentials come from `NAVER_CLIENT_ID` and `NAVER_CLIENT_SECRET`,
/// read at call time.
pub struct NaverNewsSource {
    timeout: Duration,
}

impl NaverNewsSource {
    /// Creates a source with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        NaverNewsSource { timeout }
    }
}

impl NewsSource for NaverNewsSource {
    fn fetch(&self, keyword: &str) -> Result<NewsSignal, TrendError> {
        let client_id =
            std::env::var(CLIENT_ID_VAR).map_err(|_| TrendError::MissingCredential {
                name: CLIENT_ID_VAR.to_string(),
            })?;
        let client_secret =
            std::env::var(CLIENT_SECRET_VAR).map_err(|_| TrendError::MissingCredential {
                name: CLIENT_SECRET_VAR.to_string(),
            })?;
        let response = ureq::get(ENDPOINT)
            .query("query", keyword.trim())
            .query("display", "5")
            .query("sort", "date")
            .set("X-Naver-Client-Id", &client_id)
            .set("X-Naver-Client-Secret", &client_secret)
            .timeout(self.timeout)
            .call()
            .map_err(|err| TrendError::Request {
                endpoint: ENDPOINT.to_string(),
                reason: err.to_string(),
            })?;
        let parsed: NaverResponse =
            response
                .into_json()
                .map_err(|_| TrendError::MalformedResponse {
                    endpoint: ENDPOINT.to_string(),
                })?;
        Ok(NewsSignal {
            total: parsed.total,
            titles: parsed.items.into_iter().map(|item| item.title).collect(),
        })
    }
}

/// Pulls up to two topic words from recent article titles.
///
/// Takes the first substantial word of each of the first three titles,
/// skipping markup, short fragments, and generic news vocabulary.
pub fn related_keywords(titles: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for title in titles.iter().take(3) {
        let plain = strip_html(title);
        let word = plain
            .split(|c: char| !is_word_char(c))
            .find(|word| word.chars().count() >= 3);
        if let Some(word) = word {
            if word.chars().count() > 20 || TITLE_STOPWORDS.contains(&word) {
                continue;
            }
            if !out.iter().any(|existing| existing == word) {
                out.push(word.to_string());
            }
        }
        if out.len() >= 2 {
            break;
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Drops anything between angle brackets.
fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
