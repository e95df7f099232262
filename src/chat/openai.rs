//! OpenAI streaming client.
//!
//! Uses `/v1/chat/completions` with `stream: true`. Each `data:` payload is
//! a chunk object whose text lives at `choices[0].delta.content`; the
//! stream ends with a literal `data: [DONE]`.

#[cfg(test)]
#[path = "openai_test.rs"]
mod openai_test;

use serde::Serialize;
use serde_json::Value;

use super::{ChatError, SYSTEM_INSTRUCTION};

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Stream terminator payload.
pub(crate) const DONE_MARKER: &str = "[DONE]";

pub struct OpenAiClient {
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    /// Stream a reply from the browser.
    #[cfg(feature = "hydrate")]
    pub async fn send(&self, message: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<(), ChatError> {
        use super::sse;

        let body = build_request(&self.model, message);
        let response = gloo_net::http::Request::post(OPENAI_CHAT_URL)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .json(&body)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        if !response.ok() {
            return Err(ChatError::Status { status: response.status() });
        }

        sse::stream_response(response, &mut |payload| {
            if payload == DONE_MARKER {
                return Ok(());
            }
            if let Some(text) = parse_stream_chunk(payload)? {
                on_chunk(&text);
            }
            Ok(())
        })
        .await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn send(&self, _message: &str, _on_chunk: &mut dyn FnMut(&str)) -> Result<(), ChatError> {
        let _ = (&self.api_key, &self.model);
        Err(ChatError::Unsupported)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

fn build_request<'a>(model: &'a str, message: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        stream: true,
        messages: vec![
            WireMessage { role: "system", content: SYSTEM_INSTRUCTION },
            WireMessage { role: "user", content: message },
        ],
    }
}

/// Extract the delta text from one chunk payload. Role-only and finish
/// chunks yield `Ok(None)`.
pub(crate) fn parse_stream_chunk(json_text: &str) -> Result<Option<String>, ChatError> {
    let root: Value =
        serde_json::from_str(json_text).map_err(|e| ChatError::Parse(e.to_string()))?;
    let text = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.get("delta"))
        .and_then(|d| d.get("content"))
        .and_then(Value::as_str);
    Ok(text.filter(|t| !t.is_empty()).map(str::to_owned))
}
