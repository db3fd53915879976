use super::*;

#[test]
fn valid_credentials_pass() {
    assert!(validate_login("ann@example.com", "longenough").is_none());
}

#[test]
fn blank_email_is_reported_first() {
    assert_eq!(validate_login("", "longenough").as_deref(), Some("Email is required"));
}

#[test]
fn malformed_email_is_rejected() {
    assert_eq!(
        validate_login("ann-at-example", "longenough").as_deref(),
        Some("enter a valid email address")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_login("ann@example.com", "short").as_deref(),
        Some("Password must be at least 8 characters")
    );
}

#[test]
fn blank_password_reports_requirement_before_length() {
    assert_eq!(validate_login("ann@example.com", "").as_deref(), Some("Password is required"));
}
