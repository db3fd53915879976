//! Credential cookie accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sets both credential cookies on login; this module only ever
//! reads them and expires them. Clearing happens on logout and when the HTTP
//! client observes a 401.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie holding the bearer token attached to API requests.
pub const ACCESS_TOKEN_COOKIE: &str = "wd_access_token";
/// Cookie holding the refresh credential; cleared together with the access token.
pub const REFRESH_TOKEN_COOKIE: &str = "wd_refresh_token";

/// Read a cookie by exact name. Returns `None` when the cookie is absent or
/// when running outside a browser.
pub fn get(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = raw_cookie_header()?;
        match_cookie(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Expire both credential cookies by writing a past expiry date.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
            write_cookie(&expired_cookie(name));
        }
    }
}

/// Find the first exact-name match in a `document.cookie` header string.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn match_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let pair = pair.trim_start();
        let value = pair.strip_prefix(name)?.strip_prefix('=')?;
        Some(value.to_owned())
    })
}

/// Build the `Set-Cookie`-style string that expires `name`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn expired_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

#[cfg(feature = "hydrate")]
fn raw_cookie_header() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn write_cookie(value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(value);
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}
