//! Panic payload raised by [`Outcome::value_or_panic`](crate::Outcome::value_or_panic).

use std::fmt;
use std::panic::Location;

/// The failure that was being unwrapped when `value_or_panic` gave up.
///
/// It is raised through [`std::panic::panic_any`], so a caller that catches
/// the unwind can downcast the payload to `Fatal<E>` and get the original
/// error back.
pub struct Fatal<E> {
    cause: E,
    location: &'static Location<'static>,
}

impl<E> Fatal<E> {
    #[track_caller]
    pub(crate) fn new(cause: E) -> Self {
        Self {
            cause,
            location: Location::caller(),
        }
    }

    /// The error recorded by the failed outcome.
    pub fn cause(&self) -> &E {
        &self.cause
    }

    pub fn into_cause(self) -> E {
        self.cause
    }

    /// Call site of the `value_or_panic` that raised this payload.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl<E: fmt::Debug> fmt::Display for Fatal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "called value_or_panic on a failure at {}: {:?}",
            self.location, self.cause
        )
    }
}

impl<E: fmt::Debug> fmt::Debug for Fatal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fatal")
            .field("cause", &self.cause)
            .field("location", &format_args!("{}", self.location))
            .finish()
    }
}

impl<E> std::error::Error for Fatal<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
