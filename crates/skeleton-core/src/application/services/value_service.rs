//! Value Service - the consumer side of the [`ValueHolder`] port.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::ports::ValueHolder;

/// Value observed before and after a single update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueChange {
    pub before: String,
    pub after: String,
}

impl ValueChange {
    /// `true` if the update produced a different value.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Service that reads and writes a value through an injected holder.
pub struct ValueService {
    holder: Box<dyn ValueHolder>,
}

impl ValueService {
    /// Create a new value service.
    pub fn new(holder: Box<dyn ValueHolder>) -> Self {
        Self { holder }
    }

    /// Forward a single `set_value` to the holder.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.holder.set_value(value.into());
    }

    /// Forward a single `get_value` to the holder.
    pub fn get_value(&self) -> String {
        self.holder.get_value()
    }

    /// Store `value` and report what the holder returned around the write.
    #[instrument(skip(self, value))]
    pub fn apply(&mut self, value: impl Into<String>) -> ValueChange {
        let before = self.holder.get_value();
        self.holder.set_value(value.into());
        let after = self.holder.get_value();

        let change = ValueChange { before, after };
        debug!(
            before = %change.before,
            after = %change.after,
            changed = change.changed(),
            "Value updated"
        );
        change
    }

    /// Give the holder back to the caller.
    pub fn into_inner(self) -> Box<dyn ValueHolder> {
        self.holder
    }
}
