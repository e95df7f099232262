use super::*;

// =============================================================
// Safety override
// =============================================================

#[test]
fn self_harm_keywords_trigger_the_safety_response() {
    for message in [
        "I want to die",
        "thinking about suicide",
        "I keep hurting myself",
        "SELF-HARM",
        "I might end my life tonight",
    ] {
        assert_eq!(safety_response_for(message), Some(SAFETY_RESPONSE), "{message}");
    }
}

#[test]
fn safety_check_is_case_insensitive_substring_matching() {
    assert_eq!(safety_response_for("I Want To DIE, honestly"), Some(SAFETY_RESPONSE));
}

#[test]
fn ordinary_messages_pass_the_safety_check() {
    assert_eq!(safety_response_for("I have a craving"), None);
    assert_eq!(safety_response_for(""), None);
    assert_eq!(safety_response_for("help me find a group"), None);
}

#[test]
fn safety_wins_over_other_keyword_matches() {
    // "craving" would match a canned response; the safety message must be
    // the only output.
    let mut chunks = Vec::new();
    let client = ChatClient::Canned(canned::CannedChat);
    futures::executor::block_on(client.send("craving to end my life", &mut |c| {
        chunks.push(c.to_owned());
    }))
    .unwrap();
    assert_eq!(chunks, vec![SAFETY_RESPONSE.to_owned()]);
}
