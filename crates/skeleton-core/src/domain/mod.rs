//! Domain layer: pure functions and value objects.
//!
//! Nothing in here performs I/O, holds state, or returns errors.

pub mod adder;
pub mod version;

pub use adder::add;
pub use version::{PROJECT_VERSION, VersionInfo, project_version};
