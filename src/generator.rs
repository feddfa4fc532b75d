//! The text-generation capability behind the advisor endpoint.
//!
//! Handlers only see [`TextGenerator`]; the production implementation lives
//! in [`crate::gemini`] and tests substitute their own stubs.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generation API key is not configured")]
    MissingApiKey,
    #[error("generation request timed out")]
    Timeout,
    #[error("failed to send generation request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("generation request failed ({status}): {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to decode generation response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Ask the provider to answer `prompt` while following
    /// `system_instruction`. An `Ok` result may be empty; callers decide what
    /// an empty answer means.
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, GeneratorError>;
}
