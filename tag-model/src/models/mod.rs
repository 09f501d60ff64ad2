//! Data models

pub mod tag;

// Re-exports
pub use tag::*;
