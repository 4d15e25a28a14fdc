//! # outcome-core
//!
//! [`Outcome`] holds either the value a fallible step produced or the failure
//! it recorded. Failures travel by value: every operation except
//! [`Outcome::value_or_panic`] returns normally.
//!
//! ```rust
//! use outcome_core::Outcome;
//!
//! let doubled = Outcome::<i32, &str>::success(1).then(|v| Outcome::success(v + 1));
//! assert_eq!(doubled.value_or(0), 2);
//!
//! let failed = Outcome::<i32, &str>::failure("boom");
//! assert!(!failed.is_ok());
//! assert_eq!(failed.value_or(0), 0);
//! ```
//!
//! When the error type is left out it defaults to [`Error`], re-exported from
//! `outcome-error`.

pub mod fatal;
pub mod outcome;

pub use fatal::Fatal;
pub use outcome::Outcome;
pub use outcome_error::{Error, ErrorKind};
