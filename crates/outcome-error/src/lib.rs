//! # outcome-error
//!
//! The failure type an `outcome_core::Outcome` carries when no other error
//! type is named.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong, for callers that want to match on it
//! - **Context**: key/value pairs and the failing operation, to locate the cause
//! - **Source**: the underlying error, chained instead of replaced
//!
//! ## Usage
//!
//! ```rust
//! use outcome_error::{Error, ErrorKind};
//!
//! fn load() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "unexpected token")
//!         .with_operation("config::load")
//!         .with_context("file", "settings.toml"))
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ParseFailed);
//! ```
//!
//! External errors are wrapped with `set_source(err)`; `From<io::Error>` is the
//! only blanket conversion.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;
