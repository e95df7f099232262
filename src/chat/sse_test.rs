use super::*;

// =============================================================
// Line reassembly
// =============================================================

#[test]
fn lines_split_across_chunks_are_reassembled() {
    let mut buffer = SseBuffer::default();
    assert!(buffer.push("data: {\"a\":").is_empty());
    let lines = buffer.push("1}\n\ndata: {\"b\":2}\n");
    assert_eq!(lines, vec!["data: {\"a\":1}", "", "data: {\"b\":2}"]);
}

#[test]
fn crlf_terminators_are_stripped() {
    let mut buffer = SseBuffer::default();
    let lines = buffer.push("data: x\r\n");
    assert_eq!(lines, vec!["data: x"]);
}

#[test]
fn finish_returns_the_unterminated_tail() {
    let mut buffer = SseBuffer::default();
    buffer.push("data: partial");
    assert_eq!(buffer.finish(), Some("data: partial".to_owned()));
    assert_eq!(SseBuffer::default().finish(), None);
}

// =============================================================
// Payload extraction
// =============================================================

#[test]
fn data_payload_extracts_only_data_lines() {
    assert_eq!(data_payload("data: {\"x\":1}"), Some("{\"x\":1}"));
    assert_eq!(data_payload("data:{\"x\":1}"), Some("{\"x\":1}"));
    assert_eq!(data_payload("data: [DONE]"), Some("[DONE]"));
    assert_eq!(data_payload(": keep-alive"), None);
    assert_eq!(data_payload("event: ping"), None);
    assert_eq!(data_payload(""), None);
}
