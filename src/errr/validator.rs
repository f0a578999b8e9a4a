//! Checks that return deferred error builders.

use super::builder::ErrorBuilder;
use crate::check::bounds::{self, Guard};
use crate::check::{with_value_checks, Check};
use crate::value::Value;

/// A stateless validator whose checks return an [`ErrorBuilder`].
///
/// Nothing is evaluated until the returned builder is tested. The builder's
/// message defaults to the check's message and its code to the check's code.
///
/// # Example
///
/// ```rust
/// use preconditions::{Errr, Value};
///
/// let errr = Errr::new().render_debug(false);
/// let name = Value::from("ada");
///
/// assert!(errr.should_be_string(&name, None).test().is_ok());
/// assert!(errr.check_element_index(3, 3, None).t().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Errr {
    render_debug: bool,
}

impl Errr {
    /// Creates a validator whose builders render debug params.
    pub fn new() -> Self {
        Self { render_debug: true }
    }

    /// Sets whether builders created by this validator render debug params.
    ///
    /// Lets a single flag switch verbose diagnostics on or off for every
    /// check made through this validator.
    pub fn render_debug(mut self, render: bool) -> Self {
        self.render_debug = render;
        self
    }

    /// Creates a builder for a custom condition. `failure_test` returns true
    /// when the precondition is violated.
    pub fn new_error<'a>(
        &self,
        message: impl Into<String>,
        failure_test: impl Fn() -> bool + 'a,
    ) -> ErrorBuilder<'a> {
        ErrorBuilder::new(message, failure_test).render_debug(self.render_debug)
    }

    /// Creates a builder that fails unless `value` satisfies `check`.
    pub fn check<'a>(
        &self,
        check: Check,
        value: impl Into<Option<&'a Value>>,
        message: Option<&str>,
    ) -> ErrorBuilder<'a> {
        let value = value.into();
        self.new_error(message.unwrap_or(check.default_message()), move || {
            check.fails(value)
        })
        .code(check.code())
    }

    /// Creates a builder that fails if `expression` is false.
    pub fn check_argument(&self, expression: bool, message: Option<&str>) -> ErrorBuilder<'static> {
        self.guard(Guard::Argument, message, move || !expression)
    }

    /// Creates a builder that fails if `expression` is false.
    pub fn check_state(&self, expression: bool, message: Option<&str>) -> ErrorBuilder<'static> {
        self.guard(Guard::State, message, move || !expression)
    }

    /// Creates a builder that fails unless `0 <= index < size`.
    pub fn check_element_index(
        &self,
        index: i64,
        size: i64,
        message: Option<&str>,
    ) -> ErrorBuilder<'static> {
        self.guard(Guard::ElementIndex, message, move || {
            bounds::element_index_fails(index, size)
        })
    }

    /// Creates a builder that fails unless `0 <= index <= size`.
    pub fn check_position_index(
        &self,
        index: i64,
        size: i64,
        message: Option<&str>,
    ) -> ErrorBuilder<'static> {
        self.guard(Guard::PositionIndex, message, move || {
            bounds::position_index_fails(index, size)
        })
    }

    /// Creates a builder that fails unless `0 <= start <= end <= size`.
    pub fn check_position_indexes(
        &self,
        start: i64,
        end: i64,
        size: i64,
        message: Option<&str>,
    ) -> ErrorBuilder<'static> {
        self.guard(Guard::PositionIndexes, message, move || {
            bounds::position_indexes_fail(start, end, size)
        })
    }

    fn guard(
        &self,
        guard: Guard,
        message: Option<&str>,
        failure_test: impl Fn() -> bool + 'static,
    ) -> ErrorBuilder<'static> {
        self.new_error(message.unwrap_or(guard.default_message()), failure_test)
            .code(guard.code())
    }
}

impl Default for Errr {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! deferred_checks {
    ($($name:ident => $check:ident),* $(,)?) => {
        impl Errr {
            $(
                #[doc = concat!("Creates a builder that fails unless `value` satisfies [`Check::", stringify!($check), "`].")]
                pub fn $name<'a>(
                    &self,
                    value: impl Into<Option<&'a Value>>,
                    message: Option<&str>,
                ) -> ErrorBuilder<'a> {
                    self.check(Check::$check, value, message)
                }
            )*
        }
    };
}

with_value_checks!(deferred_checks);
