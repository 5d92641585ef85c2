//! Application services - orchestration over ports.

mod value_service;

pub use value_service::{ValueChange, ValueService};
