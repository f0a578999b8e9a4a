//! # Preconditions
//!
//! A precondition library: fluent checks on values (definedness, type,
//! emptiness, truthiness, index ranges) that fail with descriptive errors.
//!
//! ## Overview
//!
//! The same catalogue of checks is offered in four flavors:
//!
//! - [`Preconditions`]: chainable checks returning `Result<&Self>`
//! - [`InstanceValidator`]: checks on a root value, addressed by dot-notation paths
//! - [`Errr`]: checks returning an [`ErrorBuilder`] that builds its error only on failure
//! - [`functional`]: the checks as free functions
//!
//! ## Core Types
//!
//! - [`Value`]: The dynamic value being checked; `None` stands for undefined
//! - [`Check`]: One variant per value check, with its default message and code
//! - [`ConfigPath`]: A dot-notation path such as `server.tls.cert`
//! - [`PreconditionError`]: The error returned by every failed check
//!
//! ## Example
//!
//! ```rust
//! use preconditions::{InstanceValidator, Preconditions, Value};
//! use serde_json::json;
//!
//! let config = Value::from(json!({"db": {"pool": {"size": 8}}}));
//!
//! // Check a value directly
//! let size = config.get("db").and_then(|db| db.get("pool")).and_then(|p| p.get("size"));
//! assert!(Preconditions::new().should_be_number(size, None).is_ok());
//!
//! // Or address it by path
//! let validator = InstanceValidator::new(&config);
//! assert!(validator.should_be_number("db.pool.size", None).is_ok());
//!
//! // Missing ancestors are reported before the requested check runs
//! let err = validator.should_be_number("db.replica.size", None).unwrap_err();
//! assert_eq!(err.message, "value should be defined {db.replica.size}");
//! ```

pub mod chain;
pub mod check;
pub mod error;
pub mod errr;
pub mod functional;
pub mod instance;
pub mod path;
pub mod value;

pub use chain::Preconditions;
pub use check::bounds::Guard;
pub use check::Check;
pub use error::PreconditionError;
pub use errr::{ErrorBuilder, Errr};
pub use instance::InstanceValidator;
pub use path::{ConfigPath, Container};
pub use value::{Function, Value};

/// Result type returned by every check.
pub type Result<T, E = PreconditionError> = std::result::Result<T, E>;
