//! Raise policy, null-coalescing and conditional dispatch helpers
use crate::error::{ErrorOrMessage, GuardError};
use crate::value::Value;

/// Always returns `Err`: a message is wrapped in [`GuardError::Assertion`],
/// an error object is passed through untouched in [`GuardError::Custom`].
pub fn fail<T>(error_or_message: impl Into<ErrorOrMessage>) -> Result<T, GuardError> {
    let err = GuardError::from(error_or_message.into());
    tracing::debug!(error = %err, custom = err.is_custom(), "guard failed");
    Err(err)
}

/// Fails with `error_or_message` when given, otherwise with the rendered default message.
pub fn fail_or_default<T>(
    error_or_message: Option<ErrorOrMessage>,
    default_message: impl FnOnce() -> String,
) -> Result<T, GuardError> {
    match error_or_message {
        Some(over) => fail(over),
        None => fail(default_message()),
    }
}

/// Something that can be null or undefined
pub trait Nullish {
    fn is_nullish(&self) -> bool;
}

impl Nullish for Value {
    fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

impl Nullish for &Value {
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

impl<T> Nullish for Option<T> {
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

/// `value` unless it is null or undefined, otherwise `fallback`
pub fn default_to<T: Nullish>(value: T, fallback: T) -> T {
    if value.is_nullish() {
        fallback
    } else {
        value
    }
}

/// Runs `then` only when `condition` holds
pub fn when<T>(condition: bool, then: impl FnOnce() -> T) -> Option<T> {
    if condition {
        Some(then())
    } else {
        None
    }
}

pub fn when_else<T>(
    condition: bool,
    then: impl FnOnce() -> T,
    otherwise: impl FnOnce() -> T,
) -> T {
    if condition {
        then()
    } else {
        otherwise()
    }
}
