use super::*;

// =============================================================
// Connect idempotency
// =============================================================

#[test]
fn first_connect_creates_a_handle() {
    let mut manager = SocketManager::new();
    assert_eq!(manager.connect(Some("t1".to_owned())), ConnectAction::OpenNew);
    assert!(manager.handle_id().is_some());
    assert_eq!(manager.auth_token(), Some("t1"));
}

#[test]
fn repeated_connect_never_creates_a_second_handle() {
    let mut manager = SocketManager::new();
    manager.connect(Some("t1".to_owned()));
    let id = manager.handle_id();

    // Not yet connected: re-arms the same handle.
    assert_eq!(manager.connect(Some("t1".to_owned())), ConnectAction::Reopen);
    assert_eq!(manager.handle_id(), id);

    // Connected: no-op.
    manager.mark_connected();
    assert_eq!(manager.connect(Some("t1".to_owned())), ConnectAction::AlreadyConnected);
    assert_eq!(manager.handle_id(), id);
}

#[test]
fn connect_after_transport_loss_reopens_same_handle() {
    let mut manager = SocketManager::new();
    manager.connect(None);
    manager.mark_connected();
    manager.mark_disconnected();
    let id = manager.handle_id();
    assert_eq!(manager.connect(None), ConnectAction::Reopen);
    assert_eq!(manager.handle_id(), id);
}

// =============================================================
// Disconnect discards the handle
// =============================================================

#[test]
fn disconnect_then_connect_creates_a_distinct_handle() {
    let mut manager = SocketManager::new();
    manager.connect(None);
    let first = manager.handle_id().expect("handle exists");

    assert!(manager.disconnect());
    assert!(manager.handle_id().is_none());

    manager.connect(None);
    let second = manager.handle_id().expect("handle exists");
    assert_ne!(first, second);
}

#[test]
fn disconnect_without_handle_reports_false() {
    let mut manager = SocketManager::new();
    assert!(!manager.disconnect());
}

// =============================================================
// Token refresh at attempt time
// =============================================================

#[test]
fn refresh_auth_updates_stored_token_between_attempts() {
    let mut manager = SocketManager::new();
    manager.connect(Some("old".to_owned()));
    manager.mark_disconnected();

    // Simulates the token rotating while the transport was down.
    manager.refresh_auth(Some("new".to_owned()));
    assert_eq!(manager.auth_token(), Some("new"));
}

#[test]
fn refresh_auth_can_drop_token() {
    let mut manager = SocketManager::new();
    manager.connect(Some("old".to_owned()));
    manager.refresh_auth(None);
    assert_eq!(manager.auth_token(), None);
}

#[test]
fn refresh_auth_without_handle_is_a_no_op() {
    let mut manager = SocketManager::new();
    manager.refresh_auth(Some("t".to_owned()));
    assert!(manager.handle_id().is_none());
}

// =============================================================
// Phase tracking
// =============================================================

#[test]
fn is_connected_tracks_phase() {
    let mut manager = SocketManager::new();
    assert!(!manager.is_connected());
    manager.connect(None);
    assert!(!manager.is_connected());
    manager.mark_connected();
    assert!(manager.is_connected());
    manager.mark_disconnected();
    assert!(!manager.is_connected());
}

// =============================================================
// ReconnectPolicy
// =============================================================

#[test]
fn policy_defaults_are_bounded() {
    let policy = ReconnectPolicy::default();
    assert_eq!(policy.max_attempts, 5);
    assert_eq!(policy.base_delay_ms, 1_000);
    assert_eq!(policy.max_delay_ms, 5_000);
}

#[test]
fn delay_grows_linearly_then_caps() {
    let policy = ReconnectPolicy::default();
    assert_eq!(policy.delay_ms(1), 1_000);
    assert_eq!(policy.delay_ms(2), 2_000);
    assert_eq!(policy.delay_ms(5), 5_000);
    assert_eq!(policy.delay_ms(9), 5_000);
}

#[test]
fn delay_for_attempt_zero_uses_base() {
    let policy = ReconnectPolicy::default();
    assert_eq!(policy.delay_ms(0), 1_000);
}

#[test]
fn exhausted_after_max_attempts() {
    let policy = ReconnectPolicy::default();
    assert!(!policy.exhausted(5));
    assert!(policy.exhausted(6));
}
