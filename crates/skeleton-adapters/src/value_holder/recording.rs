//! Recording value holder for interaction-based testing.
//!
//! Clones share the same recording, so a test can hand one clone to the code
//! under test and keep another to verify calls afterwards.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use skeleton_core::application::ports::ValueHolder;
use thiserror::Error;

/// A single call received by a [`RecordingValueHolder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HolderCall {
    Set(String),
    Get,
}

/// Verification failure reported by [`RecordingValueHolder`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpectationError {
    /// `set_value` was called a different number of times than expected.
    #[error("expected set_value to be called {expected} time(s), got {actual}")]
    SetCallCount { expected: usize, actual: usize },

    /// `set_value` was called with an unexpected argument.
    #[error("expected set_value({expected:?}), got set_value({actual:?})")]
    UnexpectedArgument { expected: String, actual: String },

    /// Scripted `get_value` results were never returned.
    #[error("{remaining} scripted get_value result(s) were never used")]
    UnusedScript { remaining: usize },
}

/// Test double that records calls and serves scripted values.
///
/// `get_value` first returns scripted values in order, each exactly once,
/// then falls back to the last value set (or the initial value).
#[derive(Debug, Clone)]
pub struct RecordingValueHolder {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    current: String,
    calls: Vec<HolderCall>,
    scripted: VecDeque<String>,
}

impl RecordingValueHolder {
    /// Create a double whose fallback value is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RecordingInner {
                current: initial.into(),
                ..RecordingInner::default()
            })),
        }
    }

    /// Stub the next unscripted `get_value` to return `value` once.
    pub fn return_once(&self, value: impl Into<String>) -> &Self {
        self.lock().scripted.push_back(value.into());
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<HolderCall> {
        self.lock().calls.clone()
    }

    /// Arguments of every `set_value` call, in order.
    pub fn set_values(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HolderCall::Set(value) => Some(value.clone()),
                HolderCall::Get => None,
            })
            .collect()
    }

    /// Number of `get_value` calls.
    pub fn get_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| matches!(call, HolderCall::Get))
            .count()
    }

    /// Check that `set_value` was called exactly once, with `expected`.
    pub fn verify_set_once(&self, expected: &str) -> Result<(), ExpectationError> {
        let sets = self.set_values();
        match sets.as_slice() {
            [actual] if actual == expected => Ok(()),
            [actual] => Err(ExpectationError::UnexpectedArgument {
                expected: expected.to_owned(),
                actual: actual.clone(),
            }),
            _ => Err(ExpectationError::SetCallCount {
                expected: 1,
                actual: sets.len(),
            }),
        }
    }

    /// Check that every scripted `get_value` result was consumed.
    pub fn verify_script_consumed(&self) -> Result<(), ExpectationError> {
        match self.lock().scripted.len() {
            0 => Ok(()),
            remaining => Err(ExpectationError::UnusedScript { remaining }),
        }
    }

    // A panicking test thread must not hide the recording from the others.
    fn lock(&self) -> MutexGuard<'_, RecordingInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingValueHolder {
    fn default() -> Self {
        Self::new("")
    }
}

impl ValueHolder for RecordingValueHolder {
    fn set_value(&mut self, value: String) {
        let mut inner = self.lock();
        inner.calls.push(HolderCall::Set(value.clone()));
        inner.current = value;
    }

    fn get_value(&self) -> String {
        let mut inner = self.lock();
        inner.calls.push(HolderCall::Get);
        match inner.scripted.pop_front() {
            Some(value) => value,
            None => inner.current.clone(),
        }
    }
}
