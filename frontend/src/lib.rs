//! Engine, browser bindings and content for the FutureCore marketing site.
//! The binary in `main.rs` holds the routed pages and section components.

pub mod config;
pub mod content;
pub mod hooks;
pub mod reveal;
