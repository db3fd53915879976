use super::*;

// =============================================================
// socket_url
// =============================================================

#[test]
fn socket_url_maps_http_to_ws() {
    assert_eq!(socket_url("http://localhost:5000", Some("t1")), "ws://localhost:5000/ws?token=t1");
}

#[test]
fn socket_url_maps_https_to_wss() {
    assert_eq!(
        socket_url("https://app.example.com", Some("t1")),
        "wss://app.example.com/ws?token=t1"
    );
}

#[test]
fn socket_url_omits_token_query_when_absent() {
    assert_eq!(socket_url("http://localhost:5000", None), "ws://localhost:5000/ws");
}

#[test]
fn socket_url_uses_current_token_value() {
    // The URL is rebuilt per attempt, so a rotated token shows up verbatim.
    let before = socket_url("http://localhost:5000", Some("old"));
    let after = socket_url("http://localhost:5000", Some("new"));
    assert!(before.ends_with("token=old"));
    assert!(after.ends_with("token=new"));
}
