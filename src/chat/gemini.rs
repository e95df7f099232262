//! Google Gemini streaming client.
//!
//! Uses `streamGenerateContent?alt=sse`, which emits one `data:` JSON
//! object per generation step. Each object carries the next text fragment
//! under `candidates[0].content.parts[*].text`.

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

use serde::Serialize;
use serde_json::Value;

use super::{ChatError, SYSTEM_INSTRUCTION};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self { api_key, model }
    }

    fn stream_url(&self) -> String {
        format!(
            "{GEMINI_BASE_URL}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.model, self.api_key
        )
    }

    /// Stream a reply from the browser.
    #[cfg(feature = "hydrate")]
    pub async fn send(&self, message: &str, on_chunk: &mut dyn FnMut(&str)) -> Result<(), ChatError> {
        use super::sse;

        let body = build_request(message);
        let response = gloo_net::http::Request::post(&self.stream_url())
            .json(&body)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;
        if !response.ok() {
            return Err(ChatError::Status { status: response.status() });
        }

        sse::stream_response(response, &mut |payload| {
            if let Some(text) = parse_stream_chunk(payload)? {
                on_chunk(&text);
            }
            Ok(())
        })
        .await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn send(&self, _message: &str, _on_chunk: &mut dyn FnMut(&str)) -> Result<(), ChatError> {
        let _ = self.stream_url();
        Err(ChatError::Unsupported)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<WireContent<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: WireInstruction<'a>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
struct WireInstruction<'a> {
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

fn build_request(message: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![WireContent { role: "user", parts: vec![WirePart { text: message }] }],
        system_instruction: WireInstruction { parts: vec![WirePart { text: SYSTEM_INSTRUCTION }] },
    }
}

/// Extract the text fragment from one SSE payload. Steps that carry no
/// text (safety metadata, finish markers) yield `Ok(None)`.
pub(crate) fn parse_stream_chunk(json_text: &str) -> Result<Option<String>, ChatError> {
    let root: Value =
        serde_json::from_str(json_text).map_err(|e| ChatError::Parse(e.to_string()))?;
    let Some(parts) = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
    else {
        return Ok(None);
    };
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    Ok(if text.is_empty() { None } else { Some(text) })
}
