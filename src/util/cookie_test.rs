use super::*;

// =============================================================
// match_cookie
// =============================================================

#[test]
fn match_cookie_finds_exact_name() {
    let header = "wd_access_token=abc123; other=zzz";
    assert_eq!(match_cookie(header, "wd_access_token").as_deref(), Some("abc123"));
}

#[test]
fn match_cookie_ignores_prefix_collisions() {
    // `wd_access_token_old` must not satisfy a lookup for `wd_access_token`.
    let header = "wd_access_token_old=stale; wd_access_token=fresh";
    assert_eq!(match_cookie(header, "wd_access_token").as_deref(), Some("fresh"));
}

#[test]
fn match_cookie_returns_first_match() {
    let header = "token=a; token=b";
    assert_eq!(match_cookie(header, "token").as_deref(), Some("a"));
}

#[test]
fn match_cookie_handles_leading_whitespace() {
    let header = "other=1;  wd_refresh_token=r1";
    assert_eq!(match_cookie(header, "wd_refresh_token").as_deref(), Some("r1"));
}

#[test]
fn match_cookie_none_when_absent() {
    assert!(match_cookie("other=1; another=2", "wd_access_token").is_none());
    assert!(match_cookie("", "wd_access_token").is_none());
}

#[test]
fn match_cookie_allows_empty_value() {
    assert_eq!(match_cookie("wd_access_token=", "wd_access_token").as_deref(), Some(""));
}

// =============================================================
// expired_cookie
// =============================================================

#[test]
fn expired_cookie_targets_named_cookie_with_past_expiry() {
    let value = expired_cookie(ACCESS_TOKEN_COOKIE);
    assert!(value.starts_with("wd_access_token=;"));
    assert!(value.contains("expires=Thu, 01 Jan 1970"));
    assert!(value.contains("path=/"));
}

#[test]
fn get_returns_none_outside_browser() {
    // Native test builds have no document; the accessor degrades to None.
    assert!(get(ACCESS_TOKEN_COOKIE).is_none());
}
