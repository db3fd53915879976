//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and chat surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod conversation_list;
pub mod message_thread;
pub mod nav_bar;
pub mod notice_stack;
pub mod project_card;
