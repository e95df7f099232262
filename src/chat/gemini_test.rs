use super::*;

// =============================================================
// Chunk parsing
// =============================================================

#[test]
fn parse_extracts_candidate_text() {
    let json = serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Hello " }, { "text": "there" }] }
        }]
    })
    .to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), Some("Hello there".to_owned()));
}

#[test]
fn parse_skips_steps_without_text() {
    let json = serde_json::json!({
        "candidates": [{ "finishReason": "STOP", "content": { "parts": [] } }]
    })
    .to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), None);

    let json = serde_json::json!({ "usageMetadata": { "totalTokenCount": 42 } }).to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), None);
}

#[test]
fn parse_rejects_invalid_json() {
    assert!(parse_stream_chunk("not json").is_err());
}

// =============================================================
// Request shape
// =============================================================

#[test]
fn request_body_carries_message_and_instruction() {
    let body = serde_json::to_value(build_request("I feel an urge")).unwrap();
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "I feel an urge");
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        SYSTEM_INSTRUCTION
    );
}

#[test]
fn stream_url_names_the_model_and_sse_mode() {
    let client = GeminiClient::new("key-1".to_owned(), "gemini-2.5-flash".to_owned());
    let url = client.stream_url();
    assert!(url.contains("/models/gemini-2.5-flash:streamGenerateContent"));
    assert!(url.contains("alt=sse"));
    assert!(url.contains("key=key-1"));
}
