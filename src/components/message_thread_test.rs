use super::*;

fn message(author_id: &str, content: &str, deleted: bool) -> ChatMessage {
    ChatMessage {
        id: "m1".to_owned(),
        conversation_id: "c1".to_owned(),
        author_id: author_id.to_owned(),
        author_name: "Ann".to_owned(),
        content: content.to_owned(),
        edited: false,
        deleted,
        timestamp: 0,
    }
}

// =============================================================
// is_own_message
// =============================================================

#[test]
fn own_message_requires_matching_author() {
    let msg = message("u1", "hi", false);
    assert!(is_own_message(&msg, Some("u1")));
    assert!(!is_own_message(&msg, Some("u2")));
    assert!(!is_own_message(&msg, None));
}

// =============================================================
// display_content
// =============================================================

#[test]
fn deleted_messages_render_placeholder() {
    let msg = message("u1", "secret", true);
    assert_eq!(display_content(&msg), "message deleted");
}

#[test]
fn live_messages_render_content() {
    let msg = message("u1", "hello there", false);
    assert_eq!(display_content(&msg), "hello there");
}

// =============================================================
// format_clock_utc
// =============================================================

#[test]
fn clock_formats_midnight_and_padding() {
    assert_eq!(format_clock_utc(0), "00:00");
    // 1970-01-01 09:05 UTC.
    assert_eq!(format_clock_utc((9 * 3600 + 5 * 60) * 1000), "09:05");
}

#[test]
fn clock_wraps_across_days() {
    let one_day_ms = 86_400_000;
    assert_eq!(format_clock_utc(one_day_ms + 3_600_000), "01:00");
}

#[test]
fn clock_tolerates_pre_epoch_values() {
    // An hour before the epoch is 23:00 on the previous day.
    assert_eq!(format_clock_utc(-3_600_000), "23:00");
}
