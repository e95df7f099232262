use super::*;

// =============================================================
// Keyword matching
// =============================================================

#[test]
fn first_matching_keyword_wins_in_table_order() {
    // "craving" precedes "urge" in the table.
    let reply = response_for("I have a craving and an urge");
    assert!(reply.contains("feel a craving"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(response_for("I'm LONELY tonight").contains("Samaritans"));
    assert!(response_for("so Anxious").contains("grounding technique"));
}

#[test]
fn unmatched_messages_get_the_default_reply() {
    assert_eq!(response_for("what's the weather"), DEFAULT_RESPONSE);
    assert_eq!(response_for(""), DEFAULT_RESPONSE);
}

// =============================================================
// Streaming
// =============================================================

#[test]
fn word_chunks_reassemble_exactly() {
    let text = "one two  three";
    assert_eq!(word_chunks(text).concat(), text);
}

#[test]
fn streamed_reply_matches_the_table_entry() {
    let mut streamed = String::new();
    futures::executor::block_on(CannedChat.send("stressed out", &mut |c| {
        streamed.push_str(c);
    }));
    assert_eq!(streamed, response_for("stressed out"));
}
