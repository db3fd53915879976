//! Authenticated REST client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying a
//! bearer token read from the credential cookie. Server-side (SSR): stubs
//! returning `None`/error since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 from any endpoint is the single session-expiry signal: credentials
//! are cleared and the browser navigates to `/login`, at most once per
//! failure burst. Every other failure is returned to the call site as a
//! `Result<_, String>` so screens can degrade without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[path = "api_chat.rs"]
mod api_chat;

#[path = "api_admin.rs"]
mod api_admin;

pub use api_admin::*;
pub use api_chat::*;

use super::types::User;
#[cfg(feature = "hydrate")]
use crate::util::cookie;

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Base URL for REST endpoints, from the build environment with a local
/// fallback.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_base() -> String {
    option_env!("WORKDESK_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Realtime server origin, derived by stripping the API path suffix from the
/// configured base URL.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn realtime_base(api_base: &str) -> String {
    api_base.strip_suffix("/api").unwrap_or(api_base).to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_expired_message() -> String {
    "session expired".to_owned()
}

/// Tracks whether the session-expiry redirect already fired, so rapid
/// repeated 401s collapse into a single navigation.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default)]
pub(crate) struct RedirectGuard {
    fired: bool,
}

#[cfg(any(test, feature = "hydrate"))]
impl RedirectGuard {
    pub(crate) fn should_redirect(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static REDIRECT_GUARD: std::cell::RefCell<RedirectGuard> =
        std::cell::RefCell::new(RedirectGuard::default());
}

/// Clear credentials and navigate to the login route, once.
#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    let first = REDIRECT_GUARD.with(|guard| guard.borrow_mut().should_redirect());
    if !first {
        return;
    }
    cookie::clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match cookie::get(cookie::ACCESS_TOKEN_COOKIE) {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, String> {
    if resp.status() == 401 {
        handle_unauthorized();
        return Err(session_expired_message());
    }
    if !resp.ok() {
        return Err(request_failed_message(resp.status()));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
pub(super) async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let resp = authorize(gloo_net::http::Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(resp)?.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
pub(super) async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, String> {
    let resp = authorize(gloo_net::http::Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(resp)?.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
pub(super) async fn patch_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> Result<T, String> {
    let resp = authorize(gloo_net::http::Request::patch(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(resp)?.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
pub(super) async fn post_empty(path: &str, body: &serde_json::Value) -> Result<(), String> {
    let resp = authorize(gloo_net::http::Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(resp)?;
    Ok(())
}

#[cfg(feature = "hydrate")]
pub(super) async fn delete_empty(path: &str) -> Result<(), String> {
    let resp = authorize(gloo_net::http::Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(resp)?;
    Ok(())
}

/// Sign in with email and password via `POST /auth/login`.
///
/// The backend sets both credential cookies on the response; the body is the
/// authenticated user.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json::<User>("/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out by calling `POST /auth/logout`, then clear credential cookies
/// locally regardless of the outcome.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = post_empty("/auth/logout", &serde_json::json!({})).await;
        cookie::clear();
    }
}
