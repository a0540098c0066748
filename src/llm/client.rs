use crate::error::{FinPulseError, Result};
use crate::llm::types::*;
use reqwest::Client;
use std::time::Duration;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            timeout,
        }
    }

    /// Sends a single-turn generation request and returns the first
    /// candidate's text. The request is timeout-bounded so a hung service
    /// cannot stall the caller indefinitely.
    ///
    /// When `response_schema` is set, the model is constrained to JSON
    /// matching that schema.
    pub(crate) async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        response_schema: Option<serde_json::Value>,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Some(schema),
            }),
        };

        let res = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(FinPulseError::AdvisorError(format!(
                "Gemini API error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let text = body
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                FinPulseError::AdvisorError("No candidates returned".to_string())
            })?;

        Ok(text)
    }
}
