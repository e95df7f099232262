use super::*;

// =============================================================
// Chunk parsing
// =============================================================

#[test]
fn parse_extracts_delta_content() {
    let json = serde_json::json!({
        "choices": [{ "index": 0, "delta": { "content": "Hi " }, "finish_reason": null }]
    })
    .to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), Some("Hi ".to_owned()));
}

#[test]
fn parse_skips_role_and_finish_chunks() {
    let json = serde_json::json!({
        "choices": [{ "index": 0, "delta": { "role": "assistant" }, "finish_reason": null }]
    })
    .to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), None);

    let json = serde_json::json!({
        "choices": [{ "index": 0, "delta": {}, "finish_reason": "stop" }]
    })
    .to_string();
    assert_eq!(parse_stream_chunk(&json).unwrap(), None);
}

#[test]
fn done_marker_is_not_json_and_must_be_filtered_by_the_caller() {
    assert!(parse_stream_chunk(DONE_MARKER).is_err());
}

// =============================================================
// Request shape
// =============================================================

#[test]
fn request_body_streams_with_system_instruction_first() {
    let body = serde_json::to_value(build_request("gpt-4o-mini", "hello")).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["stream"], true);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "hello");
}
