//! Helpline phone number detection for chat and support text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Beacon's replies quote UK helpline numbers (Samaritans 116 123, Drinkline
//! 0300 123 1110, emergency 999). Rendering splits message text into plain
//! and phone segments so the phone parts become tappable `tel:` links.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

use regex::Regex;
use std::sync::LazyLock;

// Matches UK geographic/non-geographic numbers plus the short helpline
// numbers 111, 116 123 and 999.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:0[1-9]\d{1,2}[ -]?\d{3}[ -]?\d{3,4}|116[ -]?123|111|999)\b")
        .expect("phone regex is valid")
});

/// One segment of a message: either plain text or a recognized phone number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Phone(String),
}

impl Segment {
    /// The `tel:` href for a phone segment (spaces and dashes stripped).
    pub fn tel_href(&self) -> Option<String> {
        match self {
            Segment::Phone(number) => {
                Some(format!("tel:{}", number.replace([' ', '-'], "")))
            }
            Segment::Text(_) => None,
        }
    }
}

/// Split `text` into plain and phone segments, in order.
pub fn segment_phones(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in PHONE_RE.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(text[last..m.start()].to_owned()));
        }
        out.push(Segment::Phone(m.as_str().to_owned()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(text[last..].to_owned()));
    }
    out
}
