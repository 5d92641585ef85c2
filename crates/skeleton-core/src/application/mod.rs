//! Application layer.
//!
//! This layer contains:
//! - **Ports**: the [`ValueHolder`] trait, implemented in `skeleton-adapters`
//! - **Services**: [`ValueService`], the code that consumes the port
//!
//! Services only talk to ports, never to concrete adapters, so tests can swap
//! in a double without touching service code.

pub mod ports;
pub mod services;

pub use ports::ValueHolder;
pub use services::{ValueChange, ValueService};
