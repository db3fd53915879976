use super::*;

// =============================================================
// required
// =============================================================

#[test]
fn required_rejects_blank_values() {
    assert!(required("Name", "").is_some());
    assert!(required("Name", "   ").is_some());
}

#[test]
fn required_accepts_non_blank_values() {
    assert!(required("Name", "Workdesk").is_none());
}

#[test]
fn required_message_names_the_field() {
    assert_eq!(required("Project name", "").as_deref(), Some("Project name is required"));
}

// =============================================================
// email
// =============================================================

#[test]
fn email_accepts_common_shapes() {
    assert!(email("ann@example.com").is_none());
    assert!(email("  ann.lee@sub.example.co  ").is_none());
}

#[test]
fn email_rejects_missing_at_or_domain_dot() {
    assert!(email("annexample.com").is_some());
    assert!(email("ann@example").is_some());
    assert!(email("@example.com").is_some());
    assert!(email("ann@.com").is_some());
    assert!(email("ann@example.").is_some());
    assert!(email("").is_some());
}

// =============================================================
// min_len
// =============================================================

#[test]
fn min_len_counts_characters_after_trim() {
    assert!(min_len("Password", "abc  ", 4).is_some());
    assert!(min_len("Password", "abcd", 4).is_none());
}

// =============================================================
// positive_amount
// =============================================================

#[test]
fn positive_amount_accepts_positive_numbers() {
    assert!(positive_amount("Rate", "120").is_none());
    assert!(positive_amount("Rate", " 99.5 ").is_none());
}

#[test]
fn positive_amount_rejects_zero_negative_and_garbage() {
    assert!(positive_amount("Rate", "0").is_some());
    assert!(positive_amount("Rate", "-3").is_some());
    assert!(positive_amount("Rate", "abc").is_some());
    assert!(positive_amount("Rate", "").is_some());
}

// =============================================================
// first_error
// =============================================================

#[test]
fn first_error_returns_first_failure_in_order() {
    let error = first_error([
        required("Name", "ok"),
        email("bad"),
        required("Other", ""),
    ]);
    assert_eq!(error.as_deref(), Some("enter a valid email address"));
}

#[test]
fn first_error_is_none_when_all_pass() {
    assert!(first_error([required("Name", "ok"), email("a@b.co")]).is_none());
}
