//! Filesystem output for exported content.

pub mod catalog_files;

pub use catalog_files::write_atomic;
