use serde::{Deserialize, Serialize};
use tokio::time::{timeout, Duration};

use crate::config::AppConfig;
use crate::generator::{GeneratorError, TextGenerator};

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, GeneratorError> {
        if self.api_key.is_empty() {
            return Err(GeneratorError::MissingApiKey);
        }

        let payload = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let fut = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send();

        let response = timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| GeneratorError::Timeout)?
            .map_err(GeneratorError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(GeneratorError::UpstreamStatus { status, body });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(GeneratorError::Decode)?;

        Ok(body.into_text())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. Empty when the
    /// provider returned no usable candidate; the handler substitutes its
    /// fallback answer in that case.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .concat()
            })
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::GenerateContentResponse;

    #[test]
    fn extracts_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "The VAT "}, {"text": "rate is 24%."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.into_text(), "The VAT rate is 24%.");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_text(), "");

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert_eq!(response.into_text(), "");
    }
}
