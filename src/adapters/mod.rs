//! Infrastructure adapters. Implement outbound ports.
//!
//! Static content, in-memory session and router, renderers, file export, terminal UI.

pub mod content;
pub mod persistence;
pub mod render;
pub mod router;
pub mod session;
pub mod ui;
