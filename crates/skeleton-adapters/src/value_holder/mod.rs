//! Value holder adapters.

mod recording;
mod string;

pub use recording::{ExpectationError, HolderCall, RecordingValueHolder};
pub use string::StringValueHolder;
