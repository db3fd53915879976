//! Cross-cutting helpers shared by pages and components.

pub mod auth;
pub mod cookie;
pub mod dark_mode;
pub mod permissions;
pub mod timeclock;
pub mod validate;
