//! Websocket client for the realtime presence and conversation feed.
//!
//! The socket task owns the connection lifecycle: lazy handle creation,
//! credential-bearing handshake, bounded reconnection with backoff, event
//! decoding, and chat-state updates. It is constructed once at application
//! start and reached through the `SocketController` context handle; no other
//! component touches the underlying socket.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Connection failures are logged and retried up to the policy bound, then
//! abandoned silently; the UI observes only `ChatState::connection_status`.

#[cfg(any(test, feature = "hydrate"))]
#[path = "socket_events.rs"]
mod socket_events;
#[cfg(any(test, feature = "hydrate"))]
#[path = "socket_manager.rs"]
mod socket_manager;
#[cfg(any(test, feature = "hydrate"))]
#[path = "socket_parse.rs"]
mod socket_parse;

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

#[cfg(feature = "hydrate")]
use self::socket_events::apply_event;
#[cfg(feature = "hydrate")]
use self::socket_manager::{ConnectAction, HANDSHAKE_TIMEOUT_MS, ReconnectPolicy, SocketManager};
#[cfg(feature = "hydrate")]
use self::socket_parse::{ServerEvent, parse_server_event};
#[cfg(feature = "hydrate")]
use crate::state::chat::{ChatState, ConnectionStatus};
#[cfg(feature = "hydrate")]
use crate::util::cookie;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Handle to the realtime connection task.
///
/// `connect` and `disconnect` enqueue commands for the task; both are safe to
/// call from any component at any time, and `connect` is idempotent.
#[derive(Clone)]
pub struct SocketController {
    #[cfg(feature = "hydrate")]
    tx: futures::channel::mpsc::UnboundedSender<SocketCommand>,
}

impl SocketController {
    /// Request a connection. Creates the handle on first use; re-opens it
    /// after a transport loss; no-op while already connected.
    pub fn connect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.tx.unbounded_send(SocketCommand::Connect);
        }
    }

    /// Terminate the connection and discard the handle. A later `connect`
    /// creates a fresh handle.
    pub fn disconnect(&self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.tx.unbounded_send(SocketCommand::Disconnect);
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SocketCommand {
    Connect,
    Disconnect,
}

/// Spawn the realtime client task and return its controller.
///
/// Called exactly once from the application root; the controller is then
/// shared through context.
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client(chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>) -> SocketController {
    let (tx, rx) = futures::channel::mpsc::unbounded::<SocketCommand>();
    leptos::task::spawn_local(socket_loop(chat, rx));
    SocketController { tx }
}

/// SSR stub: the controller exists so context wiring compiles, but commands
/// go nowhere.
#[cfg(not(feature = "hydrate"))]
pub fn spawn_socket_client(chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>) -> SocketController {
    let _ = chat;
    SocketController {}
}

/// Websocket URL for the realtime handshake, derived from the API base URL
/// with the credential token carried in the query.
#[cfg(any(test, feature = "hydrate"))]
fn socket_url(realtime_base: &str, token: Option<&str>) -> String {
    let ws_base = if let Some(rest) = realtime_base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = realtime_base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        realtime_base.to_owned()
    };
    match token {
        Some(token) => format!("{ws_base}/ws?token={token}"),
        None => format!("{ws_base}/ws"),
    }
}

/// Main command loop: waits for `connect`, runs one connection session with
/// bounded retries, then waits again.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    chat: RwSignal<ChatState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<SocketCommand>,
) {
    use futures::StreamExt;

    let mut manager = SocketManager::new();
    let policy = ReconnectPolicy::default();

    while let Some(command) = rx.next().await {
        match command {
            SocketCommand::Disconnect => {
                manager.disconnect();
                chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
            }
            SocketCommand::Connect => {
                let token = cookie::get(cookie::ACCESS_TOKEN_COOKIE);
                if manager.connect(token) == ConnectAction::AlreadyConnected {
                    continue;
                }
                let end = run_session(chat, &mut manager, &policy, &mut rx).await;
                if end == SessionEnd::Shutdown {
                    manager.disconnect();
                }
                chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionEnd {
    /// Explicit disconnect (or task teardown); the handle is discarded.
    Shutdown,
    /// Retry budget exhausted; the handle stays, dormant, for a later connect.
    GaveUp,
}

/// One connection session: the initial attempt plus bounded reconnects.
#[cfg(feature = "hydrate")]
async fn run_session(
    chat: RwSignal<ChatState>,
    manager: &mut SocketManager,
    policy: &ReconnectPolicy,
    rx: &mut futures::channel::mpsc::UnboundedReceiver<SocketCommand>,
) -> SessionEnd {
    let mut attempt: u32 = 0;

    loop {
        // The token may have been refreshed since the last attempt; the
        // handshake must carry whatever is current now.
        manager.refresh_auth(cookie::get(cookie::ACCESS_TOKEN_COOKIE));
        chat.update(|c| c.connection_status = ConnectionStatus::Connecting);

        let url = socket_url(&super::api::realtime_base(&super::api::api_base()), manager.auth_token());
        match connect_and_run(&url, chat, manager, rx).await {
            RunEnd::Shutdown => return SessionEnd::Shutdown,
            RunEnd::Closed(reason) => {
                leptos::logging::warn!("realtime connection lost: {reason}");
                manager.mark_disconnected();
                chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);

                attempt += 1;
                if policy.exhausted(attempt) {
                    leptos::logging::warn!("realtime reconnect attempts exhausted");
                    return SessionEnd::GaveUp;
                }
                leptos::logging::log!("realtime reconnect attempt {attempt}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(policy.delay_ms(attempt))).await;
            }
        }
    }
}

#[cfg(feature = "hydrate")]
enum RunEnd {
    Shutdown,
    Closed(String),
}

/// Open the websocket and process frames until the connection ends.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: RwSignal<ChatState>,
    manager: &mut SocketManager,
    rx: &mut futures::channel::mpsc::UnboundedReceiver<SocketCommand>,
) -> RunEnd {
    use futures::StreamExt;
    use futures::future::Either;
    use gloo_net::websocket::futures::WebSocket;

    let ws = match WebSocket::open(url) {
        Ok(ws) => ws,
        Err(e) => return RunEnd::Closed(e.to_string()),
    };
    // The write half is never used (all mutations go over HTTP) but must stay
    // alive to keep the socket open.
    let (_ws_write, mut ws_read) = ws.split();

    // Handshake: the broker acks auth with a `connect` event. Nothing within
    // the timeout means the attempt failed.
    let handshake = futures::future::select(
        Box::pin(ws_read.next()),
        Box::pin(gloo_timers::future::sleep(std::time::Duration::from_millis(
            HANDSHAKE_TIMEOUT_MS,
        ))),
    )
    .await;
    match handshake {
        Either::Left((Some(Ok(message)), _)) => dispatch_message(&message, chat, manager),
        Either::Left((Some(Err(e)), _)) => return RunEnd::Closed(e.to_string()),
        Either::Left((None, _)) => return RunEnd::Closed("closed during handshake".to_owned()),
        Either::Right(_) => return RunEnd::Closed("handshake timed out".to_owned()),
    }

    loop {
        let next = futures::future::select(Box::pin(rx.next()), Box::pin(ws_read.next())).await;
        match next {
            Either::Left((command, _)) => match command {
                None | Some(SocketCommand::Disconnect) => return RunEnd::Shutdown,
                // Already live; connect is idempotent.
                Some(SocketCommand::Connect) => {}
            },
            Either::Right((message, _)) => match message {
                Some(Ok(message)) => dispatch_message(&message, chat, manager),
                Some(Err(e)) => return RunEnd::Closed(e.to_string()),
                None => return RunEnd::Closed("socket closed".to_owned()),
            },
        }
    }
}

/// Decode and apply one inbound frame.
#[cfg(feature = "hydrate")]
fn dispatch_message(
    message: &gloo_net::websocket::Message,
    chat: RwSignal<ChatState>,
    manager: &mut SocketManager,
) {
    let gloo_net::websocket::Message::Text(text) = message else {
        // Binary frames are not part of the protocol.
        return;
    };
    match parse_server_event(text) {
        Some(ServerEvent::Connect) => {
            manager.mark_connected();
            chat.update(|c| apply_event(c, &ServerEvent::Connect));
            leptos::logging::log!("realtime connected");
        }
        Some(ServerEvent::Error(reason)) => {
            leptos::logging::warn!("realtime error event: {reason}");
        }
        Some(event) => chat.update(|c| apply_event(c, &event)),
        None => leptos::logging::warn!("unrecognized realtime event: {text}"),
    }
}
