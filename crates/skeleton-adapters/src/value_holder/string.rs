//! Production value holder.

use skeleton_core::application::ports::ValueHolder;
use tracing::trace;

/// Stores the value verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringValueHolder {
    value: String,
}

impl StringValueHolder {
    /// Create a holder with an initial value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ValueHolder for StringValueHolder {
    fn set_value(&mut self, value: String) {
        trace!(len = value.len(), "Storing value");
        self.value = value;
    }

    fn get_value(&self) -> String {
        self.value.clone()
    }
}
