//! Chat API service, the widget's transport to the backend

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Fixed text rendered in place of a reply when anything goes wrong.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error. Please try again.";

const CHAT_ENDPOINT: &str = "/api/chat";

/// Errors the chat round-trip can produce.
///
/// Both kinds are absorbed by the widget: they are logged to the console
/// and rendered as [`FALLBACK_REPLY`], never shown verbatim.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The endpoint answered with an error payload.
    #[error("chat endpoint reported: {0}")]
    Payload(String),

    /// The request never produced a usable reply: network failure,
    /// non-JSON body, unexpected shape, or a bare non-2xx status.
    #[error("transport failure: {0}")]
    Transport(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Client for the backend chat endpoint.
pub struct ChatApi;

impl ChatApi {
    /// Send one user message and wait for the reply content.
    pub async fn send_message(message: &str) -> Result<String, ChatError> {
        let response = Request::post(CHAT_ENDPOINT)
            .json(&ChatRequest { message })
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        parse_reply(status, &body)
    }
}

/// Interpret the endpoint's reply. An `error` field wins regardless of
/// status; otherwise only a body with string `content` on a 2xx counts
/// as success.
fn parse_reply(status: u16, body: &str) -> Result<String, ChatError> {
    let json: JsonValue = serde_json::from_str(body)
        .map_err(|_| ChatError::Transport(format!("non-JSON reply (status {status})")))?;

    if let Some(error) = json.get("error").and_then(JsonValue::as_str) {
        return Err(ChatError::Payload(error.to_string()));
    }

    if !(200..300).contains(&status) {
        return Err(ChatError::Transport(format!(
            "endpoint returned status {status}"
        )));
    }

    json.get("content")
        .and_then(JsonValue::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| ChatError::Transport("reply is missing the content field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_reply_yields_content() {
        let reply = parse_reply(200, r#"{"content": "Hi"}"#).unwrap();
        assert_eq!(reply, "Hi");
    }

    #[test]
    fn error_payload_wins_over_any_status() {
        let err = parse_reply(200, r#"{"error": "bad"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Payload(ref msg) if msg == "bad"));

        let err = parse_reply(500, r#"{"error": "upstream down"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Payload(_)));
    }

    #[test]
    fn non_2xx_without_error_field_is_transport() {
        let err = parse_reply(502, r#"{"message": "bad gateway"}"#).unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }

    #[test]
    fn non_json_body_is_transport() {
        let err = parse_reply(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }

    #[test]
    fn missing_or_non_string_content_is_transport() {
        let err = parse_reply(200, "{}").unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));

        let err = parse_reply(200, r#"{"content": 42}"#).unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }
}
