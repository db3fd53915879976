//! Networking modules for HTTP + the realtime event feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authenticated REST calls, `socket` manages the websocket
//! lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod socket;
pub mod types;
