//! Skeleton Core - domain and application layers of the starter template.
//!
//! The workspace follows a ports-and-adapters layout even though every
//! component here is deliberately small:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          skeleton-cli (binary)          │
//! │   (parses flags, runs the demo report)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │             (ValueService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │              (ValueHolder)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     skeleton-adapters (Infrastructure)  │
//! │ (StringValueHolder, RecordingValueHolder)│
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │          (adder, VersionInfo)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use skeleton_core::domain::{PROJECT_VERSION, add};
//!
//! assert_eq!(add(1, 2), 3);
//! assert_eq!(PROJECT_VERSION.format(), "1.2.3-rc1");
//! ```
//!
//! None of the operations in this crate can fail, so there is no error type.

pub mod application;
pub mod domain;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ValueChange, ValueService, ports::ValueHolder};
    pub use crate::domain::{PROJECT_VERSION, VersionInfo, add, project_version};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
