//! Precondition checks with deferred error construction.
//!
//! The checks in this module return an [`ErrorBuilder`] instead of a result.
//! The builder can be decorated with template arguments, debug params and
//! extra fields, and only builds its error when [`ErrorBuilder::test`] finds
//! a failure.
//!
//! # Example
//!
//! ```rust
//! use preconditions::{Errr, Value};
//! use serde_json::json;
//!
//! let errr = Errr::new();
//! let request = Value::from(json!({"id": "r-17", "items": []}));
//!
//! let err = errr
//!     .should_not_be_empty(request.get("items"), Some("request %s has no items"))
//!     .template_args(["r-17"])
//!     .set("requestId", "r-17")
//!     .test()
//!     .unwrap_err();
//!
//! assert_eq!(err.message, "request r-17 has no items");
//! assert_eq!(err.code, "should_not_be_empty");
//! ```

mod builder;
pub mod template;
mod validator;

pub use builder::ErrorBuilder;
pub use validator::Errr;
