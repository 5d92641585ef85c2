//! Driven (output) ports - implemented by infrastructure.
//!
//! Implemented by:
//! - `skeleton_adapters::StringValueHolder` (production)
//! - `skeleton_adapters::RecordingValueHolder` (testing)
//!
//! Unit tests in this crate additionally use the `mockall`-generated
//! `MockValueHolder`.

/// Port for a holder of a single text value.
///
/// Both operations are total: `set_value` accepts any text (including the
/// empty string) and `get_value` returns the most recently set text, or the
/// initial value if nothing has been set yet.
#[cfg_attr(test, mockall::automock)]
pub trait ValueHolder: Send {
    /// Replace the stored value.
    fn set_value(&mut self, value: String);

    /// Copy of the current value.
    fn get_value(&self) -> String;
}
