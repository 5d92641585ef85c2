//! Infrastructure adapters for Skeleton.
//!
//! This crate implements the ports defined in `skeleton-core::application::ports`.

pub mod value_holder;

// Re-export commonly used adapters
pub use value_holder::{ExpectationError, HolderCall, RecordingValueHolder, StringValueHolder};
