//! Application state modules, provided as `RwSignal` contexts from `app`.

pub mod auth;
pub mod chat;
pub mod projects;
pub mod services;
pub mod team;
pub mod ui;
