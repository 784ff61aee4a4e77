//! Dynamic value model
//!
//! `Value` stands in for "a value of unknown type". Each variant belongs to
//! exactly one [`TypeClass`]. Equality between values is strict: primitives
//! compare by value without coercion, symbols, functions and objects compare
//! by identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The type class a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeClass {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
    Object,
}

impl TypeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeClass::Undefined => "undefined",
            TypeClass::Null => "null",
            TypeClass::Boolean => "boolean",
            TypeClass::Number => "number",
            TypeClass::BigInt => "bigint",
            TypeClass::String => "string",
            TypeClass::Symbol => "symbol",
            TypeClass::Function => "function",
            TypeClass::Object => "object",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value of unknown type
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Object(Object),
}

impl Value {
    /// Type class of this value
    pub fn type_class(&self) -> TypeClass {
        match self {
            Value::Undefined => TypeClass::Undefined,
            Value::Null => TypeClass::Null,
            Value::Bool(_) => TypeClass::Boolean,
            Value::Number(_) => TypeClass::Number,
            Value::BigInt(_) => TypeClass::BigInt,
            Value::String(_) => TypeClass::String,
            Value::Symbol(_) => TypeClass::Symbol,
            Value::Function(_) => TypeClass::Function,
            Value::Object(_) => TypeClass::Object,
        }
    }

    /// Strict comparison: no coercion, identity for reference-like values
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<i128> {
        match self {
            Value::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_eq(other)
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 renders as 0
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form outside [1e-6, 1e21), with an explicit sign on the exponent
        let sci = format!("{:e}", n);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{}e+{}", mantissa, exp),
            _ => f.write_str(&sci),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Function(_) => f.write_str("function"),
            Value::Object(o) => write!(f, "{}", o),
        }
    }
}

// =============================================================================
// Symbol
// =============================================================================

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique token; two symbols are equal only if one is a clone of the other
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

// =============================================================================
// Function
// =============================================================================

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value, compared by identity
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Function")
    }
}

// =============================================================================
// Object
// =============================================================================

#[derive(Debug)]
enum ObjectData {
    Map(BTreeMap<String, Value>),
    Array(Vec<Value>),
}

/// A composite value, compared by identity
#[derive(Debug, Clone)]
pub struct Object(Arc<ObjectData>);

impl Object {
    pub fn empty() -> Self {
        Self::map(BTreeMap::new())
    }

    pub fn map(entries: BTreeMap<String, Value>) -> Self {
        Self(Arc::new(ObjectData::Map(entries)))
    }

    pub fn array(items: Vec<Value>) -> Self {
        Self(Arc::new(ObjectData::Array(items)))
    }

    pub fn is_array(&self) -> bool {
        matches!(*self.0, ObjectData::Array(_))
    }

    /// Property lookup; arrays are indexed by their decimal position
    pub fn get(&self, key: &str) -> Option<&Value> {
        match &*self.0 {
            ObjectData::Map(map) => map.get(key),
            ObjectData::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        }
    }

    pub fn len(&self) -> usize {
        match &*self.0 {
            ObjectData::Map(map) => map.len(),
            ObjectData::Array(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &*self.0 {
            ObjectData::Map(_) => f.write_str("[object Object]"),
            ObjectData::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // nullish elements render empty inside arrays
                    if !matches!(item, Value::Null | Value::Undefined) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Object(Object::array(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Undefined)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Object(Object::array(items.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(map) => Value::Object(Object::map(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_class_per_variant() {
        assert_eq!(Value::Undefined.type_class(), TypeClass::Undefined);
        assert_eq!(Value::Null.type_class(), TypeClass::Null);
        assert_eq!(Value::from(true).type_class(), TypeClass::Boolean);
        assert_eq!(Value::from(1).type_class(), TypeClass::Number);
        assert_eq!(Value::from(1i128).type_class(), TypeClass::BigInt);
        assert_eq!(Value::from("a").type_class(), TypeClass::String);
        assert_eq!(Value::from(Symbol::new(None)).type_class(), TypeClass::Symbol);
        assert_eq!(
            Value::from(Function::new(|_| Value::Undefined)).type_class(),
            TypeClass::Function
        );
        assert_eq!(Value::from(Object::empty()).type_class(), TypeClass::Object);
    }

    #[test]
    fn test_strict_equality_does_not_coerce() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from(1), Value::from(1i128));
        assert_ne!(Value::Null, Value::Undefined);
        assert_ne!(Value::from(0), Value::from(false));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
    }

    #[test]
    fn test_identity_equality() {
        let obj = Value::from(Object::empty());
        assert_eq!(obj, obj.clone());
        assert_ne!(obj, Value::from(Object::empty()));

        let sym = Symbol::new(Some("id"));
        assert_eq!(sym, sym.clone());
        assert_ne!(sym, Symbol::new(Some("id")));

        let func = Function::new(|args| args.first().cloned().unwrap_or_default());
        assert_eq!(func, func.clone());
        assert_ne!(func, Function::new(|_| Value::Undefined));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(2.5e-7).to_string(), "2.5e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(Symbol::new(Some("k"))).to_string(), "Symbol(k)");
        assert_eq!(Value::from(Object::empty()).to_string(), "[object Object]");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::Null, Value::from("x")]).to_string(),
            "1,,x"
        );
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({"name": "guard", "tags": [1, 2], "none": null}));
        let obj = value.as_object().unwrap();
        assert!(!obj.is_array());
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.get("name"), Some(&Value::from("guard")));
        assert_eq!(obj.get("none"), Some(&Value::Null));

        let tags = obj.get("tags").and_then(Value::as_object).unwrap();
        assert!(tags.is_array());
        assert_eq!(tags.get("1"), Some(&Value::from(2)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_function_call() {
        let double = Function::new(|args| match args.first().and_then(Value::as_f64) {
            Some(n) => Value::from(n * 2.0),
            None => Value::Undefined,
        });
        assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
        assert_eq!(double.call(&[]), Value::Undefined);
    }

    #[test]
    fn test_type_class_serialization() {
        let json = serde_json::to_string(&TypeClass::BigInt).unwrap();
        assert_eq!(json, "\"bigint\"");
    }
}
