//! Legacy type-class assertions
//!
//! Earlier releases shipped type-class assertions that all checked the
//! *string* predicate, whatever class they were named after: `is_number`
//! accepted `"abc"` and rejected `42`. The root functions of this crate
//! check their own class. These reproduce the old behaviour for callers that
//! still depend on it and should not be used by new code.

use crate::{ErrorOrMessage, GuardError, Value};
use guard_check as check;
use guard_core::{fail_or_default, TypeClass};

/// Class name as the legacy messages reported it: null was reported as "object"
fn legacy_type_name(val: &Value) -> &'static str {
    match check::type_of(val) {
        TypeClass::Null => "object",
        class => class.as_str(),
    }
}

fn legacy_check(
    val: &Value,
    expected: TypeClass,
    article_and_class: &str,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError> {
    if !check::is_string(val) {
        return fail_or_default(error_or_message, || {
            format!(
                "Value is expected to be {}, but received {}",
                article_and_class,
                legacy_type_name(val)
            )
        });
    }

    if expected != TypeClass::String {
        tracing::warn!(
            expected = %expected,
            actual = %check::type_of(val),
            "legacy assertion accepted a value of a different type class"
        );
    }
    Ok(())
}

pub fn is_string(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::String, "a string", error_or_message)
}

pub fn is_boolean(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::Boolean, "a boolean", error_or_message)
}

pub fn is_number(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::Number, "a number", error_or_message)
}

pub fn is_bigint(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::BigInt, "a bigint", error_or_message)
}

pub fn is_symbol(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::Symbol, "a symbol", error_or_message)
}

pub fn is_function(
    val: &Value,
    error_or_message: Option<ErrorOrMessage>,
) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::Function, "a function", error_or_message)
}

pub fn is_object(val: &Value, error_or_message: Option<ErrorOrMessage>) -> Result<(), GuardError> {
    legacy_check(val, TypeClass::Object, "an object", error_or_message)
}
