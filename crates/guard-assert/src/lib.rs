//! Guard Assert: assertions that narrow or fail
//!
//! Every assertion takes the value under test plus an optional override
//! ([`ErrorOrMessage`]) and returns either the narrowed value or a
//! [`GuardError`]. The raise policy is the same everywhere:
//!
//! - a message override becomes a [`GuardError::Assertion`] with that message;
//! - an error override is returned unchanged inside [`GuardError::Custom`];
//! - without an override, a fixed English message names the violated condition.
//!
//! # Example
//!
//! ```
//! use guard_assert::{is_defined, is_one_of, is_string, GuardError, Value};
//!
//! fn region(config: &Value) -> Result<&str, GuardError> {
//!     let region = is_string(is_defined(config, Some("region is required".into()))?, None)?;
//!     is_one_of(&region, &["eu", "us"], None)?;
//!     Ok(region)
//! }
//!
//! assert_eq!(region(&Value::from("eu")).unwrap(), "eu");
//! assert_eq!(
//!     region(&Value::Null).unwrap_err().to_string(),
//!     "region is required"
//! );
//! assert!(region(&Value::from("apac")).is_err());
//! ```
//!
//! The historical type-class assertions that all delegated to the string
//! predicate live in [`compat`].

pub mod compat;

use guard_check as check;
use guard_core::fail_or_default;
use std::fmt;

pub use guard_core::{ErrorOrMessage, Function, GuardError, Object, Symbol, Value};

const DEFINED_MESSAGE: &str =
    "non-null and non-undefined value is expected, but null or undefined received.";

// =============================================================================
// Null / undefined
// =============================================================================

/// Asserts that a value is not null
pub fn is_not_null(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Value, GuardError> {
    if check::is_null(val) {
        return fail_or_default(error_or_message, || {
            "Non-null value is expected, but null received.".to_string()
        });
    }
    Ok(val)
}

/// Asserts that a value is null
pub fn is_null(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    if !check::is_null(val) {
        return fail_or_default(error_or_message, || {
            "null value is expected, but non-null received.".to_string()
        });
    }
    Ok(())
}

/// Asserts that a value is not undefined
pub fn is_not_undefined(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Value, GuardError> {
    if check::is_undefined(val) {
        return fail_or_default(error_or_message, || {
            "Non-undefined value is expected, but undefined received.".to_string()
        });
    }
    Ok(val)
}

/// Asserts that a value is undefined
pub fn is_undefined(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError> {
    if !check::is_undefined(val) {
        return fail_or_default(error_or_message, || {
            "undefined value is expected, but non-undefined received.".to_string()
        });
    }
    Ok(())
}

/// Asserts that a value is neither null nor undefined
pub fn is_not_null_or_undefined(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Value, GuardError> {
    if check::is_null_or_undefined(val) {
        return fail_or_default(error_or_message, || DEFINED_MESSAGE.to_string());
    }
    Ok(val)
}

/// Alias of [`is_not_null_or_undefined`]
pub fn is_defined(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Value, GuardError> {
    is_not_null_or_undefined(val, error_or_message)
}

/// Asserts that a value is null or undefined
pub fn is_not_defined(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError> {
    if check::is_defined(val) {
        return fail_or_default(error_or_message, || {
            "Null or undefined value is expected, but non-null and non-undefined received."
                .to_string()
        });
    }
    Ok(())
}

/// Unwraps an `Option`, failing like [`is_defined`] on `None`
pub fn is_present<T>(
    val: Option<T>,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<T, GuardError> {
    match val {
        Some(inner) => Ok(inner),
        None => fail_or_default(error_or_message, || DEFINED_MESSAGE.to_string()),
    }
}

// =============================================================================
// Comparisons
// =============================================================================

/// Asserts `val == expected`; for [`Value`] this is strict comparison
pub fn is_equal<T>(
    val: &T,
    expected: &T,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError>
where
    T: PartialEq + fmt::Display + ?Sized,
{
    if val != expected {
        return fail_or_default(error_or_message, || {
            format!("Value is expected to be equal to {}, but received {}", expected, val)
        });
    }
    Ok(())
}

pub fn is_not_equal<T>(
    val: &T,
    expected: &T,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError>
where
    T: PartialEq + fmt::Display + ?Sized,
{
    if val == expected {
        return fail_or_default(error_or_message, || {
            format!("Value is expected to be not equal to {}, but received {}", expected, val)
        });
    }
    Ok(())
}

/// Asserts that `val` equals one of `values`. An empty candidate list always fails.
///
/// The default message lists candidates by their `Display` form, so null and
/// undefined appear by name.
pub fn is_one_of<T>(
    val: &T,
    values: &[T],
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError>
where
    T: PartialEq + fmt::Display,
{
    if values.iter().any(|candidate| candidate == val) {
        return Ok(());
    }

    fail_or_default(error_or_message, || {
        let listed = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Value is expected to be one of [{}], but received {}", listed, val)
    })
}

pub fn is_true(val: bool, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    if !val {
        return fail_or_default(error_or_message, || "Value is expected to be true".to_string());
    }
    Ok(())
}

pub fn is_false(val: bool, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    if val {
        return fail_or_default(error_or_message, || "Value is expected to be false".to_string());
    }
    Ok(())
}

// =============================================================================
// Type classes
// =============================================================================

fn type_mismatch(article_and_class: &str, val: &Value) -> String {
    format!(
        "Value is expected to be {}, but received {}",
        article_and_class,
        check::type_of(val)
    )
}

pub fn is_string(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&str, GuardError> {
    match val.as_str() {
        Some(s) => Ok(s),
        None => fail_or_default(error_or_message, || type_mismatch("a string", val)),
    }
}

pub fn is_boolean(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<bool, GuardError> {
    match val.as_bool() {
        Some(b) => Ok(b),
        None => fail_or_default(error_or_message, || type_mismatch("a boolean", val)),
    }
}

pub fn is_number(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<f64, GuardError> {
    match val.as_f64() {
        Some(n) => Ok(n),
        None => fail_or_default(error_or_message, || type_mismatch("a number", val)),
    }
}

pub fn is_bigint(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<i128, GuardError> {
    match val.as_bigint() {
        Some(n) => Ok(n),
        None => fail_or_default(error_or_message, || type_mismatch("a bigint", val)),
    }
}

pub fn is_symbol(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Symbol, GuardError> {
    match val.as_symbol() {
        Some(s) => Ok(s),
        None => fail_or_default(error_or_message, || type_mismatch("a symbol", val)),
    }
}

pub fn is_function(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Function, GuardError> {
    match val.as_function() {
        Some(f) => Ok(f),
        None => fail_or_default(error_or_message, || type_mismatch("a function", val)),
    }
}

pub fn is_object(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<&Object, GuardError> {
    match val.as_object() {
        Some(o) => Ok(o),
        None => fail_or_default(error_or_message, || type_mismatch("an object", val)),
    }
}
