use ibig::error::OutOfBoundsError;
use strum_macros::{Display, EnumDiscriminants};
use thiserror::Error as ThisError;

use crate::value::ValueKind;

/// An error raised by an enumerable operation.
///
/// All of these are surfaced to the caller immediately; the library never
/// retries or recovers. Errors returned by a caller's block pass through
/// unchanged.
#[derive(Debug, Clone, PartialEq, ThisError, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Display, Hash))]
#[strum_discriminants(cfg_attr(feature = "serde", derive(serde::Serialize)))]
pub enum Error {
    /// A size or count argument is out of its permitted range.
    ///
    /// Raised for negative sizes given to `drop`, `take` and `first`, and for
    /// non-positive sizes given to `each_cons` and `each_slice`.
    #[error("{0}")]
    InvalidArgument(String),
    /// Wrong number of positional arguments.
    #[error("wrong number of arguments (given {given}, expected {expected})")]
    ArityMismatch { given: usize, expected: &'static str },
    /// A value lacks the capability an operation requires of it.
    ///
    /// Raised when a `zip` argument cannot be turned into a sequence, when a
    /// `to_h` element is not an array, and by failed coercions.
    #[error("{0}")]
    TypeMismatch(String),
    /// A `to_h` element is an array, but not a pair.
    #[error("{0}")]
    ShapeMismatch(String),
    /// Two values have no ordering relative to each other.
    #[error("comparison of {0} with {1} failed")]
    Comparison(ValueKind, ValueKind),
    /// A numeric value cannot be represented where it is needed.
    #[error("{0}")]
    OutOfRange(String),
    /// A failure raised by a caller-supplied block.
    #[error("{0}")]
    Raised(String),
    /// A visitor asked a deferred enumerator to stop.
    ///
    /// This is how an early stop travels through the method an enumerator
    /// defers to. `Enumerator::each` turns it back into a normal return, so it
    /// is never seen outside of this crate.
    #[error("traversal stopped")]
    Stop,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.into()
    }

    pub(crate) fn negative_size(operation: &str) -> Self {
        Error::InvalidArgument(format!("attempt to {} negative size", operation))
    }

    pub(crate) fn invalid_size() -> Self {
        Error::InvalidArgument("invalid size".to_string())
    }

    pub(crate) fn no_implicit_conversion(from: ValueKind, into: &str) -> Self {
        Error::TypeMismatch(format!("no implicit conversion of {} into {}", from, into))
    }
}

impl From<OutOfBoundsError> for Error {
    fn from(_e: OutOfBoundsError) -> Self {
        Error::OutOfRange("integer too big to convert into i64".to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
