//! Gemini-backed text generation.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::generate::{GenerateError, TextGenerator};

const ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Text generation via the Gemini HTTP API.
///
/// Reads the API key from `GEMINI_API_KEY` at call time so a missing key
/// surfaces as a [`GenerateError`] the pipeline can fall back from.
pub struct GeminiGenerator {
    timeout: Duration,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

impl GeminiGenerator {
    /// Creates a generator with the given request timeout.
    pub fn new(timeout: Duration) -> Self {
        GeminiGenerator { timeout }
    }
}

impl Default for GeminiGenerator {
    fn default() -> Self {
        GeminiGenerator::new(Duration::from_secs(15))
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let key = std::env::var(API_KEY_VAR).map_err(|_| GenerateError::MissingCredential {
            name: API_KEY_VAR.to_string(),
        })?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        let response = ureq::post(&format!("{ENDPOINT}?key={key}"))
            .timeout(self.timeout)
            .send_json(body)
            .map_err(|err| GenerateError::Request {
                endpoint: ENDPOINT.to_string(),
                reason: err.to_string(),
            })?;
        let parsed: GeminiResponse =
            response
                .into_json()
                .map_err(|_| GenerateError::MalformedResponse {
                    endpoint: ENDPOINT.to_string(),
                })?;
        let text = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or(GenerateError::MalformedResponse {
                endpoint: ENDPOINT.to_string(),
            })?;
        Ok(text)
    }
}
