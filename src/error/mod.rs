//! Error types for failed preconditions.
//!
//! This module provides [`PreconditionError`], the single error surfaced by
//! every check, carrying the message, a machine-readable code, the path of
//! the offending value, attached fields and a diagnostic trace.

mod precondition_error;

pub use precondition_error::{PreconditionError, DEFAULT_CODE};
