//! Precondition failure error type.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::path::ConfigPath;

/// Error code used when no more specific code is set.
pub const DEFAULT_CODE: &str = "precondition_failed";

/// A failed precondition.
///
/// `PreconditionError` captures everything known about a failure:
/// - **message**: Human-readable description, either a check's default or a caller-supplied text
/// - **code**: Machine-readable check name (e.g. `should_be_string`)
/// - **path**: The dot-notation path of the value, for path-based validation
/// - **fields**: Extra immutable fields attached by an [`ErrorBuilder`](crate::ErrorBuilder)
///
/// Each error also keeps a diagnostic trace. Its first line names the error;
/// rendered debug params and the trace of an appended error follow.
///
/// # Example
///
/// ```rust
/// use preconditions::PreconditionError;
/// use serde_json::json;
///
/// let error = PreconditionError::new("value should be a string")
///     .with_code("should_be_string")
///     .with_field("requestId", json!("abc-123"));
///
/// assert_eq!(error.to_string(), "value should be a string");
/// assert_eq!(error.field("requestId"), Some(&json!("abc-123")));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct PreconditionError {
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error code.
    pub code: String,
    /// The path to the value that failed, when validated by path.
    pub path: Option<ConfigPath>,
    /// Fields attached to the error, in insertion order.
    pub fields: IndexMap<String, JsonValue>,
    trace: Vec<String>,
    #[source]
    appended: Option<Box<PreconditionError>>,
}

impl PreconditionError {
    /// Creates a new error with the given message and the default code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: DEFAULT_CODE.to_string(),
            path: None,
            fields: IndexMap::new(),
            trace: Vec::new(),
            appended: None,
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the path of the failing value and returns self for chaining.
    pub fn with_path(mut self, path: ConfigPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Attaches a field and returns self for chaining.
    ///
    /// A field with the same key is replaced.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the field stored under `key`.
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    /// Returns the error this one was appended to, if any.
    pub fn appended(&self) -> Option<&PreconditionError> {
        self.appended.as_deref()
    }

    /// Returns the lines of the diagnostic trace.
    ///
    /// The header line is always first, followed by any extra lines and the
    /// appended error's trace.
    pub fn trace_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.trace.len() + 1);
        lines.push(self.header());
        lines.extend(self.trace.iter().cloned());
        if let Some(appended) = &self.appended {
            lines.extend(appended.trace_lines());
        }
        lines
    }

    /// Returns the full diagnostic trace as one string.
    pub fn trace(&self) -> String {
        self.trace_lines().join("\n")
    }

    pub(crate) fn push_trace(&mut self, line: impl Into<String>) {
        self.trace.push(line.into());
    }

    pub(crate) fn append_to(&mut self, target: PreconditionError) {
        self.appended = Some(Box::new(target));
    }

    fn header(&self) -> String {
        match &self.path {
            Some(path) => format!("PreconditionError[{}] at {}: {}", self.code, path, self.message),
            None => format!("PreconditionError[{}]: {}", self.code, self.message),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<PreconditionError>();
    assert_sync::<PreconditionError>();
};
