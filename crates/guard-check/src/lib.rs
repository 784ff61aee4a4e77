//! Guard Check: type-class predicates
//!
//! Total functions over [`Value`]: every predicate answers a yes/no question
//! about the value's type class and never fails.
//!
//! ```
//! use guard_check::{is_defined, is_string};
//! use guard_core::Value;
//!
//! let name = Value::from("guard");
//! assert!(is_defined(&name));
//! assert!(is_string(&name));
//! assert!(!is_defined(&Value::Null));
//! ```

pub use guard_core::{TypeClass, Value};

/// Type class of the value
pub fn type_of(val: &Value) -> TypeClass {
    val.type_class()
}

pub fn is_null(val: &Value) -> bool {
    matches!(val, Value::Null)
}

pub fn is_undefined(val: &Value) -> bool {
    matches!(val, Value::Undefined)
}

pub fn is_null_or_undefined(val: &Value) -> bool {
    is_null(val) || is_undefined(val)
}

/// Neither null nor undefined
pub fn is_defined(val: &Value) -> bool {
    !is_null_or_undefined(val)
}

pub fn is_string(val: &Value) -> bool {
    type_of(val) == TypeClass::String
}

pub fn is_boolean(val: &Value) -> bool {
    type_of(val) == TypeClass::Boolean
}

pub fn is_number(val: &Value) -> bool {
    type_of(val) == TypeClass::Number
}

pub fn is_bigint(val: &Value) -> bool {
    type_of(val) == TypeClass::BigInt
}

pub fn is_symbol(val: &Value) -> bool {
    type_of(val) == TypeClass::Symbol
}

pub fn is_function(val: &Value) -> bool {
    type_of(val) == TypeClass::Function
}

/// Composite values only; `Null` is its own type class here
pub fn is_object(val: &Value) -> bool {
    type_of(val) == TypeClass::Object
}
