//! Tag value types
//!
//! Plain data model shared by every consumer of tags. No validation,
//! storage or serialization lives here; callers compose these values.

pub mod models;

// Re-exports
pub use models::{DEFAULT_DISPLAY_COLOR, DEFAULT_DISPLAY_LABEL, Tag, UNASSIGNED_ID};
