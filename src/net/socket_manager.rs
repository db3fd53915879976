//! Connection-handle bookkeeping for the realtime client.
//!
//! DESIGN
//! ======
//! The manager is the only owner of the handle: at most one live handle per
//! tab, idempotent `connect`, and a fresh handle identity after every
//! explicit `disconnect`. The websocket loop in `socket` drives it; nothing
//! else holds a mutable reference.

#[cfg(test)]
#[path = "socket_manager_test.rs"]
mod socket_manager_test;

/// Handshake auth payload and lifecycle phase of the single realtime handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SocketHandle {
    /// Monotonic identity; a re-created handle never reuses an old id.
    pub id: u64,
    /// Bearer token supplied at the next (re)connection attempt.
    pub auth_token: Option<String>,
    pub phase: HandlePhase,
}

/// Lifecycle phase of the handle while it exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HandlePhase {
    Connecting,
    Connected,
    /// Handle exists but the transport is down; `connect` re-opens it.
    Disconnected,
}

/// What the websocket loop should do after a `connect` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConnectAction {
    /// No handle existed; one was created and should be opened.
    OpenNew,
    /// A dormant handle was re-armed and should be opened.
    Reopen,
    /// The handle is already live; nothing to do.
    AlreadyConnected,
}

#[derive(Debug, Default)]
pub(crate) struct SocketManager {
    handle: Option<SocketHandle>,
    next_handle_id: u64,
}

impl SocketManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Request a connection. Idempotent: an existing handle is never
    /// duplicated, and a live one is left untouched.
    pub(crate) fn connect(&mut self, auth_token: Option<String>) -> ConnectAction {
        match &mut self.handle {
            Some(handle) if handle.phase == HandlePhase::Connected => ConnectAction::AlreadyConnected,
            Some(handle) => {
                handle.auth_token = auth_token;
                handle.phase = HandlePhase::Connecting;
                ConnectAction::Reopen
            }
            None => {
                self.next_handle_id += 1;
                self.handle = Some(SocketHandle {
                    id: self.next_handle_id,
                    auth_token,
                    phase: HandlePhase::Connecting,
                });
                ConnectAction::OpenNew
            }
        }
    }

    /// Store the token read at attempt time, so a refresh that happened since
    /// the last attempt is reflected in the next handshake.
    pub(crate) fn refresh_auth(&mut self, auth_token: Option<String>) {
        if let Some(handle) = &mut self.handle {
            handle.auth_token = auth_token;
        }
    }

    pub(crate) fn mark_connected(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.phase = HandlePhase::Connected;
        }
    }

    pub(crate) fn mark_disconnected(&mut self) {
        if let Some(handle) = &mut self.handle {
            handle.phase = HandlePhase::Disconnected;
        }
    }

    /// Discard the handle entirely. The next `connect` creates a fresh one.
    pub(crate) fn disconnect(&mut self) -> bool {
        self.handle.take().is_some()
    }

    #[cfg(test)]
    pub(crate) fn handle_id(&self) -> Option<u64> {
        self.handle.as_ref().map(|handle| handle.id)
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.handle.as_ref()?.auth_token.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn is_connected(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| handle.phase == HandlePhase::Connected)
    }
}

/// Bounded retry schedule for reconnection attempts.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReconnectPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self { max_attempts: 5, base_delay_ms: 1_000, max_delay_ms: 5_000 }
    }
}

impl ReconnectPolicy {
    /// Linear backoff, capped: 1s, 2s, 3s, 4s, 5s, 5s...
    pub(crate) fn delay_ms(&self, attempt: u32) -> u64 {
        (self.base_delay_ms * u64::from(attempt.max(1))).min(self.max_delay_ms)
    }

    pub(crate) fn exhausted(&self, attempt: u32) -> bool {
        attempt > self.max_attempts
    }
}

/// How long to wait for the broker's `connect` ack before failing an attempt.
pub(crate) const HANDSHAKE_TIMEOUT_MS: u64 = 20_000;
