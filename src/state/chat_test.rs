use super::*;

// =============================================================
// Streaming replies
// =============================================================

#[test]
fn chunks_replace_the_typing_placeholder_then_accumulate() {
    let mut transcript = Transcript::default();
    transcript.push_user("I feel an urge to drink");
    transcript.begin_reply();
    assert_eq!(transcript.messages().last().map(|m| m.text.as_str()), Some(TYPING_PLACEHOLDER));

    transcript.append_chunk("It's ");
    transcript.append_chunk("completely ");
    transcript.append_chunk("normal.");
    assert_eq!(
        transcript.messages().last().map(|m| m.text.as_str()),
        Some("It's completely normal.")
    );
    assert_eq!(transcript.messages().len(), 2);
}

#[test]
fn chunks_without_an_open_reply_are_ignored() {
    let mut transcript = Transcript::default();
    transcript.append_chunk("orphan");
    assert!(transcript.is_empty());

    transcript.push_user("hello");
    transcript.append_chunk("orphan");
    assert_eq!(transcript.messages().len(), 1);
    assert_eq!(transcript.messages()[0].text, "hello");
}

#[test]
fn complete_messages_are_not_overwritten_by_later_chunks() {
    let mut transcript = Transcript::default();
    transcript.begin_reply();
    transcript.append_chunk("fixed reply");
    transcript.append_chunk(" extra");
    // Later chunks extend a finished model message; the placeholder logic
    // only applies to the first chunk after begin_reply.
    assert_eq!(transcript.messages()[0].text, "fixed reply extra");
}

// =============================================================
// Failure rollback
// =============================================================

#[test]
fn roll_back_removes_the_user_message_and_the_bubble() {
    let mut transcript = Transcript::default();
    transcript.push_user("first");
    transcript.begin_reply();
    transcript.append_chunk("first reply");
    transcript.push_user("second");
    transcript.begin_reply();

    transcript.roll_back_exchange();
    assert_eq!(transcript.messages().len(), 2);
    assert_eq!(transcript.messages()[1].text, "first reply");
}

#[test]
fn roll_back_on_a_short_transcript_empties_it() {
    let mut transcript = Transcript::default();
    transcript.push_user("only");
    transcript.roll_back_exchange();
    assert!(transcript.is_empty());
}
