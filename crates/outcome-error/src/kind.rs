//! Error kinds

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The kind of failure that occurred.
///
/// Outcomes never look at this themselves; it is there for consumers that
/// branch on why a producer failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Catch-all for failures with no better classification
    Unexpected,

    /// The requested operation is not supported
    Unsupported,

    /// Invalid argument passed to a producer
    InvalidArgument,

    /// A looked-up entity does not exist
    NotFound,

    /// Input could not be parsed
    ParseFailed,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Timeout occurred
    Timeout,

    /// An internal invariant did not hold
    InvariantViolation,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
