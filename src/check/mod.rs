//! The catalogue of precondition checks.
//!
//! This module provides [`Check`], one variant per value check with its
//! default message, error code and predicate, and the [`bounds`] guards for
//! arguments, state and indices. Every validator flavor is a thin wrapper
//! around these definitions.
//!
//! # Example
//!
//! ```rust
//! use preconditions::{Check, Value};
//!
//! let value = Value::from("hello");
//! assert!(Check::String.passes(Some(&value)));
//! assert!(Check::Array.fails(Some(&value)));
//! assert_eq!(Check::Array.default_message(), "value should be an array");
//! ```

pub mod bounds;

use crate::value::Value;

/// A check performed against a single, possibly undefined, value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// Value is present; null counts as present.
    Defined,
    /// Value is absent.
    Undefined,
    /// Value is an array.
    Array,
    /// Value is not an array.
    NotArray,
    /// Value is a reference kind: object, array, date, regex or function.
    Object,
    /// Value is not a reference kind.
    NotObject,
    /// Value is absent, a zero-length string, array or object, or any other kind.
    Empty,
    /// Value is a string, array or object with at least one element.
    NotEmpty,
    /// Value is a function.
    Function,
    /// Value is not a function.
    NotFunction,
    /// Value is a string.
    String,
    /// Value is not a string.
    NotString,
    /// Value is a number, NaN included.
    Number,
    /// Value is not a number.
    NotNumber,
    /// Value is a finite number.
    Finite,
    /// Value is positive or negative infinity.
    Infinite,
    /// Value is a boolean.
    Boolean,
    /// Value is not a boolean.
    NotBoolean,
    /// Value is a date.
    Date,
    /// Value is not a date.
    NotDate,
    /// Value is a regular expression.
    RegExp,
    /// Value is not a regular expression.
    NotRegExp,
    /// Value is absent or falsey.
    Falsey,
    /// Value is truthy.
    NotFalsey,
    /// Same as [`Check::Falsey`].
    Falsy,
    /// Same as [`Check::NotFalsey`].
    NotFalsy,
    /// Value is truthy.
    Truthy,
    /// Value is absent or falsey.
    NotTruthy,
}

impl Check {
    /// Returns the message used when the caller supplies none.
    pub fn default_message(self) -> &'static str {
        match self {
            Check::Defined => "value should be defined",
            Check::Undefined => "value should be undefined",
            Check::Array => "value should be an array",
            Check::NotArray => "value should not be an array",
            Check::Object => "value should be an object",
            Check::NotObject => "value should not be an object",
            Check::Empty => "value should be empty",
            Check::NotEmpty => "value should not be empty",
            Check::Function => "value should be a function",
            Check::NotFunction => "value should not be a function",
            Check::String => "value should be a string",
            Check::NotString => "value should not be a string",
            Check::Number => "value should be a number",
            Check::NotNumber => "value should not be a number",
            Check::Finite => "value should be finite",
            Check::Infinite => "value should be infinite",
            Check::Boolean => "value should be a boolean",
            Check::NotBoolean => "value should not be a boolean",
            Check::Date => "value should be a date",
            Check::NotDate => "value should not be a date",
            Check::RegExp => "value should be a regular expression",
            Check::NotRegExp => "value should not be a regular expression",
            Check::Falsey => "value should be falsey",
            Check::NotFalsey => "value should not be falsey",
            Check::Falsy => "value should be falsy",
            Check::NotFalsy => "value should not be falsy",
            Check::Truthy => "value should be truthy",
            Check::NotTruthy => "value should not be truthy",
        }
    }

    /// Returns the machine-readable code, which matches the check's method name.
    pub fn code(self) -> &'static str {
        match self {
            Check::Defined => "should_be_defined",
            Check::Undefined => "should_be_undefined",
            Check::Array => "should_be_array",
            Check::NotArray => "should_not_be_array",
            Check::Object => "should_be_object",
            Check::NotObject => "should_not_be_object",
            Check::Empty => "should_be_empty",
            Check::NotEmpty => "should_not_be_empty",
            Check::Function => "should_be_function",
            Check::NotFunction => "should_not_be_function",
            Check::String => "should_be_string",
            Check::NotString => "should_not_be_string",
            Check::Number => "should_be_number",
            Check::NotNumber => "should_not_be_number",
            Check::Finite => "should_be_finite",
            Check::Infinite => "should_be_infinite",
            Check::Boolean => "should_be_boolean",
            Check::NotBoolean => "should_not_be_boolean",
            Check::Date => "should_be_date",
            Check::NotDate => "should_not_be_date",
            Check::RegExp => "should_be_reg_exp",
            Check::NotRegExp => "should_not_be_reg_exp",
            Check::Falsey => "should_be_falsey",
            Check::NotFalsey => "should_not_be_falsey",
            Check::Falsy => "should_be_falsy",
            Check::NotFalsy => "should_not_be_falsy",
            Check::Truthy => "should_be_truthy",
            Check::NotTruthy => "should_not_be_truthy",
        }
    }

    /// Returns true if `value` satisfies this check. `None` is undefined.
    pub fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::Defined => value.is_some(),
            Check::Undefined => value.is_none(),
            Check::Array => matches!(value, Some(Value::Array(_))),
            Check::NotArray => !Check::Array.passes(value),
            Check::Object => value.is_some_and(is_reference),
            Check::NotObject => !Check::Object.passes(value),
            Check::Empty => value.map_or(true, is_empty),
            Check::NotEmpty => !Check::Empty.passes(value),
            Check::Function => matches!(value, Some(Value::Function(_))),
            Check::NotFunction => !Check::Function.passes(value),
            Check::String => matches!(value, Some(Value::String(_))),
            Check::NotString => !Check::String.passes(value),
            Check::Number => matches!(value, Some(Value::Number(_))),
            Check::NotNumber => !Check::Number.passes(value),
            Check::Finite => matches!(value, Some(Value::Number(n)) if n.is_finite()),
            Check::Infinite => matches!(value, Some(Value::Number(n)) if n.is_infinite()),
            Check::Boolean => matches!(value, Some(Value::Bool(_))),
            Check::NotBoolean => !Check::Boolean.passes(value),
            Check::Date => matches!(value, Some(Value::Date(_))),
            Check::NotDate => !Check::Date.passes(value),
            Check::RegExp => matches!(value, Some(Value::RegExp(_))),
            Check::NotRegExp => !Check::RegExp.passes(value),
            Check::Falsey | Check::Falsy | Check::NotTruthy => !value.is_some_and(Value::is_truthy),
            Check::NotFalsey | Check::NotFalsy | Check::Truthy => value.is_some_and(Value::is_truthy),
        }
    }

    /// Returns true if `value` violates this check.
    pub fn fails(self, value: Option<&Value>) -> bool {
        !self.passes(value)
    }
}

/// Objects, arrays, dates, regular expressions and functions are all
/// reference kinds and count as objects.
fn is_reference(value: &Value) -> bool {
    matches!(
        value,
        Value::Object(_) | Value::Array(_) | Value::Date(_) | Value::RegExp(_) | Value::Function(_)
    )
}

/// Only strings, arrays and objects can hold anything.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => true,
    }
}

/// Invokes `$callback!` with the full list of value checks as
/// `method_name => Variant` pairs.
///
/// Each validator flavor defines a local macro that turns the list into
/// methods, so the catalogue is written down once.
macro_rules! with_value_checks {
    ($callback:ident) => {
        $callback! {
            should_be_defined => Defined,
            should_be_undefined => Undefined,
            should_be_array => Array,
            should_not_be_array => NotArray,
            should_be_object => Object,
            should_not_be_object => NotObject,
            should_be_empty => Empty,
            should_not_be_empty => NotEmpty,
            should_be_function => Function,
            should_not_be_function => NotFunction,
            should_be_string => String,
            should_not_be_string => NotString,
            should_be_number => Number,
            should_not_be_number => NotNumber,
            should_be_finite => Finite,
            should_be_infinite => Infinite,
            should_be_boolean => Boolean,
            should_not_be_boolean => NotBoolean,
            should_be_date => Date,
            should_not_be_date => NotDate,
            should_be_reg_exp => RegExp,
            should_not_be_reg_exp => NotRegExp,
            should_be_falsey => Falsey,
            should_not_be_falsey => NotFalsey,
            should_be_falsy => Falsy,
            should_not_be_falsy => NotFalsy,
            should_be_truthy => Truthy,
            should_not_be_truthy => NotTruthy,
        }
    };
}

pub(crate) use with_value_checks;

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(f64::NAN),
            Value::Number(f64::NEG_INFINITY),
            Value::from(""),
            Value::from("text"),
            Value::Array(vec![]),
            Value::from(json!([1])),
            Value::object(),
            Value::from(json!({"k": 1})),
            Value::from(chrono::Utc::now()),
            Value::from(Regex::new("a").unwrap()),
            Value::function(|_| Value::Null),
        ]
    }

    #[test]
    fn test_negated_checks_are_complements() {
        let pairs = [
            (Check::Defined, Check::Undefined),
            (Check::Array, Check::NotArray),
            (Check::Object, Check::NotObject),
            (Check::Empty, Check::NotEmpty),
            (Check::Function, Check::NotFunction),
            (Check::String, Check::NotString),
            (Check::Number, Check::NotNumber),
            (Check::Boolean, Check::NotBoolean),
            (Check::Date, Check::NotDate),
            (Check::RegExp, Check::NotRegExp),
            (Check::Falsey, Check::NotFalsey),
            (Check::Falsy, Check::NotFalsy),
            (Check::Truthy, Check::NotTruthy),
        ];

        for value in samples() {
            for (check, negated) in pairs {
                assert_ne!(
                    check.passes(Some(&value)),
                    negated.passes(Some(&value)),
                    "{:?} / {:?} on {}",
                    check,
                    negated,
                    value.type_name()
                );
            }
        }
    }

    #[test]
    fn test_undefined_value() {
        assert!(Check::Defined.fails(None));
        assert!(Check::Undefined.passes(None));
        assert!(Check::Empty.passes(None));
        assert!(Check::Falsey.passes(None));
        assert!(Check::String.fails(None));
        assert!(Check::NotString.passes(None));
        assert!(Check::Object.fails(None));
    }

    #[test]
    fn test_null_is_defined_but_not_object() {
        assert!(Check::Defined.passes(Some(&Value::Null)));
        assert!(Check::Object.fails(Some(&Value::Null)));
        assert!(Check::Empty.passes(Some(&Value::Null)));
    }

    #[test]
    fn test_object_covers_reference_kinds() {
        assert!(Check::Object.passes(Some(&Value::Array(vec![]))));
        assert!(Check::Object.passes(Some(&Value::function(|_| Value::Null))));
        assert!(Check::Object.passes(Some(&Value::from(chrono::Utc::now()))));
        assert!(Check::Object.fails(Some(&Value::from("s"))));
    }

    #[test]
    fn test_empty_only_counts_collections() {
        assert!(Check::Empty.passes(Some(&Value::Number(42.0))));
        assert!(Check::Empty.passes(Some(&Value::Bool(true))));
        assert!(Check::Empty.passes(Some(&Value::from(""))));
        assert!(Check::NotEmpty.passes(Some(&Value::from("a"))));
        assert!(Check::NotEmpty.passes(Some(&Value::from(json!([0])))));
        assert!(Check::NotEmpty.passes(Some(&Value::from(json!({"a": null})))));
    }

    #[test]
    fn test_number_family() {
        let nan = Value::Number(f64::NAN);
        let inf = Value::Number(f64::INFINITY);
        let one = Value::Number(1.0);

        assert!(Check::Number.passes(Some(&nan)));
        assert!(Check::Finite.fails(Some(&nan)));
        assert!(Check::Infinite.fails(Some(&nan)));

        assert!(Check::Finite.fails(Some(&inf)));
        assert!(Check::Infinite.passes(Some(&inf)));

        assert!(Check::Finite.passes(Some(&one)));
        assert!(Check::Infinite.fails(Some(&one)));

        assert!(Check::Finite.fails(Some(&Value::from("1"))));
    }

    #[test]
    fn test_falsey_spellings_agree() {
        for value in samples() {
            assert_eq!(
                Check::Falsey.passes(Some(&value)),
                Check::Falsy.passes(Some(&value))
            );
            assert_eq!(
                Check::Falsey.passes(Some(&value)),
                Check::NotTruthy.passes(Some(&value))
            );
        }
    }

    #[test]
    fn test_codes_and_messages_are_unique() {
        use std::collections::HashSet;

        let mut codes = HashSet::new();
        let mut messages = HashSet::new();
        macro_rules! collect {
            ($($name:ident => $check:ident),* $(,)?) => {
                $(
                    assert_eq!(Check::$check.code(), stringify!($name));
                    codes.insert(Check::$check.code());
                    messages.insert(Check::$check.default_message());
                )*
            };
        }
        with_value_checks!(collect);

        assert_eq!(codes.len(), 28);
        assert_eq!(messages.len(), 28);
    }
}
