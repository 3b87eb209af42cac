//! Session adapters. Implement SessionPort.

pub mod memory_session;

pub use memory_session::InMemorySession;
