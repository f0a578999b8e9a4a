//! Deferred error construction.
//!
//! This module provides [`ErrorBuilder`], which separates deciding whether a
//! precondition failed from building the error that reports it.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::template;
use crate::error::PreconditionError;
use crate::Result;

/// Debug params captured by [`ErrorBuilder::debug`] and friends.
#[derive(Debug, Clone)]
struct DebugParams {
    params: IndexMap<String, JsonValue>,
    /// Explicit flag from [`ErrorBuilder::debug_if`]; `None` follows the builder.
    render: Option<bool>,
}

/// A lazily evaluated precondition that builds its error only on failure.
///
/// The failure test, message templating, debug rendering and field
/// attachment all wait until [`test`](Self::test) is called. When the test
/// reports no failure nothing is built at all.
///
/// Configuration methods never fail and return the builder, so a whole
/// precondition reads as one expression ending in `.test()?` (or `.t()?`).
///
/// # Example
///
/// ```rust
/// use preconditions::ErrorBuilder;
/// use serde_json::json;
///
/// let retries = 7;
/// let err = ErrorBuilder::new("too many retries (%s > %s)", || retries > 5)
///     .template_args([retries.to_string(), "5".to_string()])
///     .code("retry_limit")
///     .set("retries", retries)
///     .debug([("limit", json!(5))])
///     .test()
///     .unwrap_err();
///
/// assert_eq!(err.message, "too many retries (7 > 5)");
/// assert_eq!(err.code, "retry_limit");
/// assert_eq!(err.field("retries"), Some(&json!(7)));
/// assert!(err.trace().contains("limit: 5"));
/// ```
pub struct ErrorBuilder<'a> {
    message: String,
    template_args: Option<Vec<String>>,
    code: Option<String>,
    failure_test: Box<dyn Fn() -> bool + 'a>,
    render_debug: bool,
    debug: Option<DebugParams>,
    fields: IndexMap<String, JsonValue>,
    append_to: Option<PreconditionError>,
}

impl<'a> ErrorBuilder<'a> {
    /// Creates a builder that fails whenever `failure_test` returns true.
    ///
    /// `failure_test` is not called here; it runs on every [`test`](Self::test).
    pub fn new(message: impl Into<String>, failure_test: impl Fn() -> bool + 'a) -> Self {
        Self {
            message: message.into(),
            template_args: None,
            code: None,
            failure_test: Box::new(failure_test),
            render_debug: true,
            debug: None,
            fields: IndexMap::new(),
            append_to: None,
        }
    }

    /// Sets the positional arguments substituted into the message on failure.
    ///
    /// See [`template::format`] for the placeholder rules.
    pub fn template_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template_args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the code of the built error.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets whether [`debug`](Self::debug) params are rendered into the
    /// trace. Defaults to true.
    ///
    /// Params attached with [`debug_if`](Self::debug_if) keep their own flag.
    pub fn render_debug(mut self, render: bool) -> Self {
        self.render_debug = render;
        self
    }

    /// Attaches debug params, rendered into the error's trace on failure.
    ///
    /// Replaces params attached earlier. Params are not rendered when
    /// rendering is switched off with [`render_debug`](Self::render_debug),
    /// whether before or after this call.
    pub fn debug<I, K, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        self.attach_debug(params, None)
    }

    /// Attaches debug params, rendered only when `render` is true,
    /// whatever [`render_debug`](Self::render_debug) says.
    pub fn debug_if<I, K, V>(self, params: I, render: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        self.attach_debug(params, Some(render))
    }

    fn attach_debug<I, K, V>(mut self, params: I, render: Option<bool>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        self.debug = Some(DebugParams {
            params: params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            render,
        });
        self
    }

    /// Queues a field to attach to the built error. A later call with the
    /// same key wins.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Queues every field of `fields`, in iteration order, as if by [`set`](Self::set).
    pub fn set_all<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        for (key, value) in fields {
            self.fields.insert(key.into(), value.into());
        }
        self
    }

    /// Appends the built error to `error`.
    ///
    /// The built error's trace is followed by `error`'s trace, `error`'s
    /// fields are carried over unless this builder sets the same key, and
    /// `error` becomes the built error's [`source`](std::error::Error::source).
    pub fn append_to(mut self, error: PreconditionError) -> Self {
        self.append_to = Some(error);
        self
    }

    /// Runs the failure test and returns the built error if it reports a
    /// failure.
    ///
    /// Every call runs the test again.
    pub fn test(&self) -> Result<()> {
        if !(self.failure_test)() {
            return Ok(());
        }
        let error = self.build();
        tracing::debug!(code = %error.code, message = %error.message, "precondition failed");
        Err(error)
    }

    /// Shorthand for [`test`](Self::test).
    pub fn t(&self) -> Result<()> {
        self.test()
    }

    fn build(&self) -> PreconditionError {
        let message = match &self.template_args {
            Some(args) => template::format(&self.message, args),
            None => self.message.clone(),
        };

        let mut error = PreconditionError::new(message);
        if let Some(code) = &self.code {
            error = error.with_code(code.clone());
        }

        if let Some(target) = &self.append_to {
            error.fields = target.fields.clone();
        }
        for (key, value) in &self.fields {
            error.fields.insert(key.clone(), value.clone());
        }

        let render = |d: &&DebugParams| d.render.unwrap_or(self.render_debug);
        if let Some(debug) = self.debug.as_ref().filter(render) {
            error.push_trace("Debug Params:");
            for (key, value) in &debug.params {
                error.push_trace(format!("  {}: {}", key, value));
            }
        }

        if let Some(target) = &self.append_to {
            error.append_to(target.clone());
        }

        error
    }
}

impl fmt::Debug for ErrorBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuilder")
            .field("message", &self.message)
            .field("template_args", &self.template_args)
            .field("code", &self.code)
            .field("debug", &self.debug)
            .field("fields", &self.fields)
            .field("append_to", &self.append_to)
            .finish_non_exhaustive()
    }
}
