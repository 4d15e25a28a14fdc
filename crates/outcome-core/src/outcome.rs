use crate::fatal::Fatal;
use outcome_error::Error;
use std::fmt;

/// The value a fallible step produced, or the failure it recorded.
///
/// An `Outcome` is always exactly one of the two variants. It has no
/// `Default`: a value only exists once a producer picked a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E = Error> {
    Success(T),
    Failure(E),
}

use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    pub const fn success(value: T) -> Self {
        Success(value)
    }

    pub const fn failure(error: E) -> Self {
        Failure(error)
    }

    /// Returns `true` if no failure is recorded.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_ok()
    }

    /// The held value, if this is a success.
    pub fn value(&self) -> Option<&T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The recorded failure, if any.
    pub fn error(&self) -> Option<&E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows both slots, so the consuming operations can run against an
    /// outcome that is shared.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns the held value, or `default` if this is a failure.
    ///
    /// `default` is handed back untouched.
    pub fn value_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Like [`value_or`](Self::value_or), but only builds the fallback when
    /// it is needed.
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => fallback(error),
        }
    }

    /// Returns the held value, panicking if this is a failure.
    ///
    /// For call sites that have already established the step cannot fail.
    ///
    /// # Panics
    ///
    /// On a failure, panics with a [`Fatal<E>`] payload whose
    /// [`cause`](Fatal::cause) is the recorded error. The error is also
    /// logged at `error` level first, since the default panic hook cannot
    /// print a non-string payload.
    #[track_caller]
    pub fn value_or_panic(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => value,
            Failure(cause) => {
                let fatal = Fatal::new(cause);
                tracing::error!(
                    cause = ?fatal.cause(),
                    location = %fatal.location(),
                    "value_or_panic called on a failure"
                );
                std::panic::panic_any(fatal)
            }
        }
    }

    /// Chains the next fallible step.
    ///
    /// On success, calls `f` with the held value and returns its outcome as
    /// is. On failure, returns the same failure and never calls `f`.
    pub fn then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => {
                tracing::trace!("then short-circuited on a failure");
                Failure(error)
            }
        }
    }

    /// Same as [`then`](Self::then).
    ///
    /// Note that `f` returns an `Outcome`; this is a bind, not a plain
    /// value transform.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.then(f)
    }

    /// Converts into a standard `Result`, so the `?` operator can take over.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
