//! Upstream chat provider client

use crate::config::UpstreamConfig;
use crate::error::{Result, ServerError};

use reqwest::Client;
use serde_json::{json, Value as JsonValue};
use std::time::Duration;
use tracing::debug;

/// System prompt sent ahead of every user message.
const SYSTEM_PROMPT: &str = "You are StudyChat, a helpful AI assistant for students. \
    Provide clear, concise, and accurate information to help with homework, studying, \
    and understanding academic concepts.";

/// Reply used when a successful upstream response does not carry the
/// expected completion structure.
const MALFORMED_REPLY: &str = "Sorry, I could not generate a proper response.";

/// Reply used when the upstream body offers nothing usable at all.
const UNUSABLE_REPLY: &str = "Sorry, I could not process your request.";

/// Client for the configured OpenAI-compatible chat completions provider
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Create a new upstream client
    ///
    /// # Errors
    ///
    /// Returns an error if client initialization fails
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServerError::Upstream(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Relay one user message and return the reply text
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream request fails or answers non-2xx
    pub async fn generate_reply(&self, message: &str) -> Result<String> {
        debug!("forwarding chat request to upstream: {}", self.config.url);

        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": message },
            ],
        });

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.config.url))
            .header("Content-Type", "application/json")
            .json(&payload);

        if let Some(api_key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServerError::Upstream(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServerError::Upstream(format!(
                "upstream returned {status}: {body}"
            )));
        }

        let body: JsonValue = response
            .json()
            .await
            .map_err(|e| ServerError::Upstream(format!("failed to parse response: {e}")))?;

        debug!("upstream response: {body}");

        Ok(extract_reply(&body))
    }
}

/// Pull the completion text out of an upstream body, falling back to its
/// error message (or a canned apology) when the shape is unexpected.
fn extract_reply(body: &JsonValue) -> String {
    match body.get("choices").and_then(JsonValue::as_array) {
        Some(choices) if !choices.is_empty() => choices[0]
            .get("message")
            .and_then(|message| message.get("content"))
            .and_then(JsonValue::as_str)
            .unwrap_or(MALFORMED_REPLY)
            .to_string(),
        _ => body
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(JsonValue::as_str)
            .unwrap_or(UNUSABLE_REPLY)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_completion_content() {
        let body = json!({
            "choices": [{
                "message": { "role": "assistant", "content": "Photosynthesis converts light into energy." }
            }]
        });

        assert_eq!(
            extract_reply(&body),
            "Photosynthesis converts light into energy."
        );
    }

    #[test]
    fn falls_back_when_choice_has_no_content() {
        let body = json!({ "choices": [{ "finish_reason": "stop" }] });
        assert_eq!(extract_reply(&body), MALFORMED_REPLY);
    }

    #[test]
    fn surfaces_upstream_error_message_without_choices() {
        let body = json!({ "error": { "message": "model overloaded" } });
        assert_eq!(extract_reply(&body), "model overloaded");
    }

    #[test]
    fn answers_apology_for_unrecognized_bodies() {
        let body = json!({ "unexpected": true });
        assert_eq!(extract_reply(&body), UNUSABLE_REPLY);

        let body = json!({ "choices": [] });
        assert_eq!(extract_reply(&body), UNUSABLE_REPLY);
    }
}
