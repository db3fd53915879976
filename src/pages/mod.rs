//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod chat;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod project;
pub mod projects;
pub mod roles;
pub mod services;
pub mod users;
