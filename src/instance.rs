//! Path-based validation of a nested value.
//!
//! This module provides [`InstanceValidator`], which is bound to one root
//! value and addresses the values it checks with dot-notation paths.

use crate::check::{with_value_checks, Check};
use crate::error::PreconditionError;
use crate::functional;
use crate::path::{walk, ConfigPath};
use crate::value::Value;
use crate::Result;

/// A validator bound to a root value, addressing values by path.
///
/// Each check first requires every ancestor of the path to be defined, then
/// runs against the value at the path. Failures carry the path, and their
/// message ends with the path's location tag (e.g. ` {server.port}`).
///
/// # Example
///
/// ```rust
/// use preconditions::{InstanceValidator, Value};
/// use serde_json::json;
///
/// let config = Value::from(json!({
///     "server": {"host": "localhost", "port": 8080}
/// }));
/// let validator = InstanceValidator::new(&config);
///
/// assert!(validator
///     .should_be_string("server.host", None)
///     .and_then(|v| v.should_be_number("server.port", None))
///     .is_ok());
///
/// let err = validator.should_be_defined("database.url", None).unwrap_err();
/// assert_eq!(err.message, "value should be defined {database.url}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InstanceValidator<'r> {
    root: Option<&'r Value>,
}

impl<'r> InstanceValidator<'r> {
    /// Creates a validator over `root`.
    pub fn new(root: &'r Value) -> Self {
        Self { root: Some(root) }
    }

    /// Creates a validator with no root. Every path resolves as if the root
    /// were an empty object.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Returns the root value, if any.
    pub fn root(&self) -> Option<&'r Value> {
        self.root
    }

    /// Resolves `path`, requiring every ancestor to be defined.
    ///
    /// Returns `Ok(None)` when only the final segment is missing.
    pub fn resolve(&self, path: &str) -> Result<Option<&'r Value>> {
        walk(self.root, &ConfigPath::parse(path), Ok)
    }

    /// Runs `check` against the value at `path`.
    ///
    /// When the value is missing and `check` cannot pass on a missing value,
    /// the failure reports that the value should be defined.
    pub fn check(&self, check: Check, path: &str, message: Option<&str>) -> Result<&Self> {
        let config_path = ConfigPath::parse(path);
        walk(self.root, &config_path, |value| {
            if check.passes(value) {
                return Ok(());
            }
            let failed = if value.is_none() {
                Check::Defined
            } else {
                check
            };
            tracing::debug!(code = failed.code(), path = %config_path, "precondition failed");
            Err(leaf_error(failed, &config_path, message))
        })?;
        Ok(self)
    }

    /// Fails if `expression` is false.
    ///
    /// Guards take plain values, not paths, and record no path on failure.
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

fn leaf_error(check: Check, path: &ConfigPath, message: Option<&str>) -> PreconditionError {
    let message = message.unwrap_or(check.default_message());
    PreconditionError::new(format!("{}{}", message, path.location_tag()))
        .with_code(check.code())
        .with_path(path.clone())
}

macro_rules! instance_checks {
    ($($name:ident => $check:ident),* $(,)?) => {
        impl<'r> InstanceValidator<'r> {
            $(
                #[doc = concat!("Fails unless the value at `path` satisfies [`Check::", stringify!($check), "`].")]
                pub fn $name(&self, path: &str, message: Option<&str>) -> Result<&Self> {
                    self.check(Check::$check, path, message)
                }
            )*
        }
    };
}

with_value_checks!(instance_checks);
