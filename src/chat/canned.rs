//! The offline keyword-matched responder.
//!
//! Matching is first-hit in table order over a lowercased copy of the
//! message; nothing matching gets the default response. Replies are chunked
//! word by word so the widget's streaming path is exercised even offline.

#[cfg(test)]
#[path = "canned_test.rs"]
mod canned_test;

/// `(keyword, response)` pairs, checked in order.
const CANNED_RESPONSES: &[(&str, &str)] = &[
    (
        "craving",
        "It's completely normal to feel a craving, and it's a sign that you're making a change. Remember that cravings are like waves; they build, peak, and then pass. Try distracting yourself for 15 minutes. Go for a short walk, listen to a loud song, or drink a large glass of cold water. You can get through this moment. The Mindful Drinking Hub also has a 'breather' tool that might help.",
    ),
    (
        "urge",
        "It's completely normal to feel an urge, and it's a sign that you're making a change. Remember that urges are like waves; they build, peak, and then pass. Try distracting yourself for 15 minutes. Go for a short walk, listen to a loud song, or drink a large glass of cold water. You can get through this moment. The Mindful Drinking Hub also has a 'breather' tool that might help.",
    ),
    (
        "lonely",
        "Feeling lonely is incredibly tough. Reaching out is a brave first step. Sometimes just connecting with another human voice can make a world of difference. The Samaritans are available to listen 24/7 on 116 123. They're completely confidential and there to support you.",
    ),
    (
        "stressed",
        "Stress is a major trigger for many people. It sounds like you're going through a lot right now. Instead of a drink, could you try a different 10-minute activity to decompress? A short walk, some deep breathing exercises, or even just stepping outside for fresh air can sometimes help break the cycle. The Mindful Drinking Hub has a breathing tool you can use.",
    ),
    (
        "help",
        "It's great that you're reaching out for help. There are amazing, confidential resources available. For a friendly, non-judgmental chat about your drinking, you can call Drinkline for free on 0300 123 1110. If you're feeling overwhelmed emotionally, the Samaritans are always there to listen on 116 123.",
    ),
    (
        "friend",
        "It's hard seeing a friend struggle. The best thing you can do is talk to them when they're sober, express your concern using 'I' statements (like 'I'm worried about you'), and listen without judgment. For your own support, Al-Anon (0800 0086 811) is a fantastic resource for friends and family of people with drinking problems.",
    ),
    (
        "anxious",
        "Anxiety can be really overwhelming, and it's common to want to reach for something to quiet it down. Remember that while alcohol might seem to help in the short term, it often makes anxiety worse in the long run. Try a grounding technique: name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste. This can help bring you back to the present moment.",
    ),
];

const DEFAULT_RESPONSE: &str = "Thank you for reaching out. I'm here to offer support. I can provide guidance on managing cravings, finding resources, or dealing with difficult feelings. What's on your mind? Remember, if you need to talk to someone, you can call the Samaritans on 116 123 at any time.";

/// Delay between streamed words, for a typing feel.
#[cfg(feature = "hydrate")]
const WORD_DELAY_MS: u32 = 50;

/// The full reply for `message`.
pub fn response_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    CANNED_RESPONSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(DEFAULT_RESPONSE, |(_, response)| response)
}

/// Split a reply into streaming chunks: each word keeps its trailing space
/// except the last, so concatenation reproduces the reply exactly.
pub fn word_chunks(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, w)| if i == last { (*w).to_owned() } else { format!("{w} ") })
        .collect()
}

pub struct CannedChat;

impl CannedChat {
    /// Stream the canned reply word by word. In the browser a short delay
    /// runs between words; in native tests the chunks arrive immediately.
    pub async fn send(&self, message: &str, on_chunk: &mut dyn FnMut(&str)) {
        for chunk in word_chunks(response_for(message)) {
            on_chunk(&chunk);
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(WORD_DELAY_MS)))
                .await;
        }
    }
}
