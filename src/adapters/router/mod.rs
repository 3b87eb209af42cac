//! Router adapters. Implement RouterPort.

pub mod memory_router;

pub use memory_router::MemoryRouter;
