use super::*;

// =============================================================
// Segmentation
// =============================================================

#[test]
fn plain_text_yields_single_text_segment() {
    let segments = segment_phones("take a short walk and drink some water");
    assert_eq!(segments.len(), 1);
    assert!(matches!(&segments[0], Segment::Text(t) if t.contains("short walk")));
}

#[test]
fn samaritans_number_is_detected() {
    let segments = segment_phones("call the Samaritans on 116 123 at any time.");
    assert!(segments.contains(&Segment::Phone("116 123".to_owned())));
}

#[test]
fn drinkline_number_is_detected() {
    let segments = segment_phones("call Drinkline for free on 0300 123 1110.");
    assert!(segments.contains(&Segment::Phone("0300 123 1110".to_owned())));
}

#[test]
fn emergency_numbers_are_detected() {
    let segments = segment_phones("Please call 999 or NHS 111 now.");
    assert!(segments.contains(&Segment::Phone("999".to_owned())));
    assert!(segments.contains(&Segment::Phone("111".to_owned())));
}

#[test]
fn segments_preserve_original_order_and_text() {
    let segments = segment_phones("Call 999 or the Samaritans on 116 123 right now.");
    let rebuilt: String = segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) | Segment::Phone(t) => t.as_str(),
        })
        .collect();
    assert_eq!(rebuilt, "Call 999 or the Samaritans on 116 123 right now.");
}

#[test]
fn years_and_ordinary_numbers_are_not_phones() {
    let segments = segment_phones("within 15-20 minutes the urge fades");
    assert_eq!(segments.len(), 1);
    assert!(matches!(&segments[0], Segment::Text(_)));
}

// =============================================================
// tel: links
// =============================================================

#[test]
fn tel_href_strips_spaces_and_dashes() {
    assert_eq!(
        Segment::Phone("0300 123 1110".to_owned()).tel_href(),
        Some("tel:03001231110".to_owned())
    );
    assert_eq!(Segment::Phone("116 123".to_owned()).tel_href(), Some("tel:116123".to_owned()));
    assert_eq!(Segment::Text("hello".to_owned()).tel_href(), None);
}
