//! Chainable precondition checks.
//!
//! This module provides [`Preconditions`], a stateless validator whose checks
//! return `Result<&Self>` so that several preconditions read as one chain.

use crate::check::{with_value_checks, Check};
use crate::functional;
use crate::value::Value;
use crate::Result;

/// A stateless, chainable validator.
///
/// `Preconditions` holds no data; construct one where it is needed, or keep
/// one around and pass it by reference.
///
/// # Example
///
/// ```rust
/// use preconditions::{Preconditions, Value};
/// use serde_json::json;
///
/// fn configure(options: &Value) -> preconditions::Result<()> {
///     Preconditions::new()
///         .should_be_object(options, Some("options must be an object"))?
///         .should_be_string(options.get("name"), None)?
///         .should_not_be_empty(options.get("name"), Some("name must not be blank"))?;
///     Ok(())
/// }
///
/// assert!(configure(&Value::from(json!({"name": "api"}))).is_ok());
///
/// let err = configure(&Value::from(json!({"name": ""}))).unwrap_err();
/// assert_eq!(err.message, "name must not be blank");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Preconditions;

impl Preconditions {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Runs `check` against `value`.
    pub fn check<'v>(
        &self,
        check: Check,
        value: impl Into<Option<&'v Value>>,
        message: Option<&str>,
    ) -> Result<&Self> {
        functional::check(check, value.into(), message)?;
        Ok(self)
    }

    /// Fails if `expression` is false.
    pub fn check_argument(&self, expression: bool, message: Option<&str>) -> Result<&Self> {
        functional::check_argument(expression, message)?;
        Ok(self)
    }

    /// Fails if `expression` is false.
    pub fn check_state(&self, expression: bool, message: Option<&str>) -> Result<&Self> {
        functional::check_state(expression, message)?;
        Ok(self)
    }

    /// Fails unless `0 <= index < size`.
    pub fn check_element_index(&self, index: i64, size: i64, message: Option<&str>) -> Result<&Self> {
        functional::check_element_index(index, size, message)?;
        Ok(self)
    }

    /// Fails unless `0 <= index <= size`.
    pub fn check_position_index(&self, index: i64, size: i64, message: Option<&str>) -> Result<&Self> {
        functional::check_position_index(index, size, message)?;
        Ok(self)
    }

    /// Fails unless `0 <= start <= end <= size`.
    pub fn check_position_indexes(
        &self,
        start: i64,
        end: i64,
        size: i64,
        message: Option<&str>,
    ) -> Result<&Self> {
        functional::check_position_indexes(start, end, size, message)?;
        Ok(self)
    }
}

macro_rules! chained_checks {
    ($($name:ident => $check:ident),* $(,)?) => {
        impl Preconditions {
            $(
                #[doc = concat!("Fails unless `value` satisfies [`Check::", stringify!($check), "`].")]
                pub fn $name<'v>(
                    &self,
                    value: impl Into<Option<&'v Value>>,
                    message: Option<&str>,
                ) -> Result<&Self> {
                    self.check(Check::$check, value, message)
                }
            )*
        }
    };
}

with_value_checks!(chained_checks);
