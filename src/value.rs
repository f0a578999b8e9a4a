//! Dynamic values checked by the validators.
//!
//! This module provides [`Value`], a loosely typed value covering the kinds
//! the checks distinguish between (arrays, objects, dates, regular
//! expressions, functions, ...). An absent value ("undefined") is modelled as
//! `Option<&Value>::None` rather than as a variant.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

/// Signature of the callable stored in a [`Function`] value.
type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value.
///
/// Functions are compared by identity: two `Function`s are equal only when
/// they share the same underlying closure.
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Wraps a closure as a function value.
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Function(..)")
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamically typed value.
///
/// # Example
///
/// ```rust
/// use preconditions::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"user": {"name": "Alice", "tags": []}}));
/// assert_eq!(value.type_name(), "object");
/// assert_eq!(value.get("user").map(Value::type_name), Some("object"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicit null. Null is a defined value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number. NaN and the infinities are numbers too.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A map from keys to values that preserves insertion order.
    Object(IndexMap<String, Value>),
    /// A point in time.
    Date(DateTime<Utc>),
    /// A compiled regular expression.
    RegExp(Regex),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Creates a function value from a closure.
    pub fn function(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Value::Function(Function::new(f))
    }

    /// Creates an empty object.
    pub fn object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Returns the kind name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
            Value::Function(_) => "function",
        }
    }

    /// Returns true if the value is truthy.
    ///
    /// `false`, `0`, `-0`, `NaN`, the empty string and null are falsey;
    /// everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Looks up a key on an object, or a decimal index on an array.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

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

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Numbers are `f64`, so integers beyond ±2^53 round to the nearest
/// representable value.
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Value::RegExp(regex)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Value>();
    assert_sync::<Value>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_large_i64_rounds() {
        assert_eq!(Value::from(9_007_199_254_740_992_i64), Value::Number(9_007_199_254_740_992.0));
        assert_eq!(Value::from(9_007_199_254_740_993_i64), Value::Number(9_007_199_254_740_992.0));
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let value = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        match value {
            Value::Object(map) => {
                let keys: Vec<_> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["z", "a", "m"]);
            }
            other => panic!("expected object, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_from_json_numbers_are_f64() {
        assert_eq!(Value::from(json!(3)), Value::Number(3.0));
        assert_eq!(Value::from(json!(-1.5)), Value::Number(-1.5));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(f64::INFINITY).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::object().is_truthy());
        assert!(Value::function(|_| Value::Null).is_truthy());
    }

    #[test]
    fn test_get_on_object_and_array() {
        let value = Value::from(json!({"items": ["a", "b"]}));
        let items = value.get("items").unwrap();

        assert_eq!(items.get("1"), Some(&Value::from("b")));
        assert_eq!(items.get("2"), None);
        assert_eq!(items.get("x"), None);
        assert_eq!(Value::from("abc").get("0"), None);
    }

    #[test]
    fn test_type_names() {
        let re = Regex::new("^a+$").unwrap();
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(re).type_name(), "regexp");
        assert_eq!(Value::from(Utc::now()).type_name(), "date");
        assert_eq!(Value::function(|_| Value::Null).type_name(), "function");
    }

    #[test]
    fn test_function_identity() {
        let f = Function::new(|args| Value::Number(args.len() as f64));
        let same = f.clone();
        let other = Function::new(|args| Value::Number(args.len() as f64));

        assert_eq!(f, same);
        assert_ne!(f, other);
        assert_eq!(f.call(&[Value::Null, Value::Null]), Value::Number(2.0));
    }

    #[test]
    fn test_regexp_equality_by_pattern() {
        let a = Value::from(Regex::new("[0-9]+").unwrap());
        let b = Value::from(Regex::new("[0-9]+").unwrap());
        assert_eq!(a, b);
    }
}
