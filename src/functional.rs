//! Precondition checks as free functions.
//!
//! Every function returns `Ok(())` when the precondition holds and a
//! [`PreconditionError`] otherwise. The error message is the caller's
//! `message`, or the check's default when `None`.
//!
//! # Example
//!
//! ```rust
//! use preconditions::{functional, Value};
//! use serde_json::json;
//!
//! let config = Value::from(json!({"port": 8080}));
//!
//! assert!(functional::should_be_number(config.get("port"), None).is_ok());
//!
//! let err = functional::should_be_defined(config.get("host"), Some("host is required"))
//!     .unwrap_err();
//! assert_eq!(err.message, "host is required");
//! assert_eq!(err.code, "should_be_defined");
//! ```

use crate::check::bounds::{self, Guard};
use crate::check::{with_value_checks, Check};
use crate::error::PreconditionError;
use crate::value::Value;
use crate::Result;

/// Runs `check` against `value`.
pub fn check(check: Check, value: Option<&Value>, message: Option<&str>) -> Result<()> {
    if check.passes(value) {
        return Ok(());
    }
    tracing::debug!(code = check.code(), "precondition failed");
    Err(PreconditionError::new(message.unwrap_or(check.default_message())).with_code(check.code()))
}

macro_rules! functional_checks {
    ($($name:ident => $check:ident),* $(,)?) => {
        $(
            #[doc = concat!("Fails unless `value` satisfies [`Check::", stringify!($check), "`].")]
            pub fn $name<'v>(value: impl Into<Option<&'v Value>>, message: Option<&str>) -> Result<()> {
                check(Check::$check, value.into(), message)
            }
        )*
    };
}

with_value_checks!(functional_checks);

/// Fails if `expression` is false. Use for checks on method arguments.
pub fn check_argument(expression: bool, message: Option<&str>) -> Result<()> {
    guard(Guard::Argument, !expression, message)
}

/// Fails if `expression` is false. Use for checks on the receiver's state.
pub fn check_state(expression: bool, message: Option<&str>) -> Result<()> {
    guard(Guard::State, !expression, message)
}

/// Fails unless `0 <= index < size`.
pub fn check_element_index(index: i64, size: i64, message: Option<&str>) -> Result<()> {
    guard(
        Guard::ElementIndex,
        bounds::element_index_fails(index, size),
        message,
    )
}

/// Fails unless `0 <= index <= size`.
pub fn check_position_index(index: i64, size: i64, message: Option<&str>) -> Result<()> {
    guard(
        Guard::PositionIndex,
        bounds::position_index_fails(index, size),
        message,
    )
}

/// Fails unless `0 <= start <= end <= size`.
pub fn check_position_indexes(start: i64, end: i64, size: i64, message: Option<&str>) -> Result<()> {
    guard(
        Guard::PositionIndexes,
        bounds::position_indexes_fail(start, end, size),
        message,
    )
}

fn guard(guard: Guard, failed: bool, message: Option<&str>) -> Result<()> {
    if !failed {
        return Ok(());
    }
    tracing::debug!(code = guard.code(), "precondition failed");
    Err(PreconditionError::new(message.unwrap_or(guard.default_message())).with_code(guard.code()))
}
