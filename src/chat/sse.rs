//! Server-sent-events plumbing for the streaming providers.
//!
//! Both Gemini (`alt=sse`) and OpenAI (`stream: true`) deliver incremental
//! results as `data: <json>` lines. The line reassembly here is pure;
//! only [`stream_response`] touches the browser's fetch body.

#[cfg(test)]
#[path = "sse_test.rs"]
mod sse_test;

#[cfg(feature = "hydrate")]
use super::ChatError;

/// Reassembles complete lines from arbitrarily-split network chunks.
#[derive(Debug, Default)]
pub struct SseBuffer {
    partial: String,
}

impl SseBuffer {
    /// Feed a network chunk, returning the lines it completed.
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.partial.push_str(chunk);
        let mut lines = Vec::new();
        while let Some(newline) = self.partial.find('\n') {
            let line = self.partial[..newline].trim_end_matches('\r').to_owned();
            self.partial.drain(..=newline);
            lines.push(line);
        }
        lines
    }

    /// Whatever is left after the stream ends; usually empty.
    pub fn finish(self) -> Option<String> {
        let rest = self.partial.trim();
        if rest.is_empty() { None } else { Some(rest.to_owned()) }
    }
}

/// The payload of a `data:` line, if this line carries one. Comment lines,
/// event names and blank separators yield `None`.
pub fn data_payload(line: &str) -> Option<&str> {
    let payload = line.strip_prefix("data:")?;
    Some(payload.strip_prefix(' ').unwrap_or(payload))
}

/// Read a fetch response body, handing each SSE `data:` payload to
/// `on_data`.
#[cfg(feature = "hydrate")]
pub async fn stream_response(
    response: gloo_net::http::Response,
    on_data: &mut dyn FnMut(&str) -> Result<(), ChatError>,
) -> Result<(), ChatError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let body = response
        .body()
        .ok_or_else(|| ChatError::Parse("response has no body".to_owned()))?;
    let reader: web_sys::ReadableStreamDefaultReader = body
        .get_reader()
        .dyn_into()
        .map_err(|_| ChatError::Parse("body is not a readable stream".to_owned()))?;

    let mut buffer = SseBuffer::default();
    loop {
        let result = JsFuture::from(reader.read())
            .await
            .map_err(|e| ChatError::Request(format_js_error(&e)))?;
        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .ok()
            .and_then(|d| d.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| ChatError::Parse(format_js_error(&e)))?;
        let bytes = js_sys::Uint8Array::new(&value).to_vec();
        let text = String::from_utf8_lossy(&bytes);
        for line in buffer.push(&text) {
            if let Some(payload) = data_payload(&line) {
                on_data(payload)?;
            }
        }
    }
    if let Some(rest) = buffer.finish() {
        if let Some(payload) = data_payload(&rest) {
            on_data(payload)?;
        }
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn format_js_error(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
