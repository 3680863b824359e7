//! Error type for reading a value that is not there.
//!
//! Reading the absent side of an [`Either`](super::Either) or the value of an
//! absent [`Maybe`](super::Maybe) is a contract violation by the caller. The
//! panicking accessors (`left`, `right`, `value`) panic with the display text
//! of [`EmptyAccess`]; the `try_*` accessors hand the same value back as an
//! `Err` for callers that prefer to propagate it with `?`.

use std::fmt;

/// Represents an attempt to read a slot that holds no value.
///
/// # Examples
///
/// ```rust
/// use chainlift::control::{Either, EmptyAccess};
///
/// let either: Either<i32, String> = Either::Left(42);
/// let error = either.try_right().unwrap_err();
/// assert_eq!(
///     error,
///     EmptyAccess {
///         container: "Either",
///         accessor: "right",
///     }
/// );
/// assert_eq!(
///     format!("{error}"),
///     "EmptyAccess: called `Either::right()` on a value without that slot"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyAccess {
    /// The container that was accessed (`"Either"` or `"Maybe"`).
    pub container: &'static str,
    /// The accessor that was called (`"left"`, `"right"` or `"value"`).
    pub accessor: &'static str,
}

impl EmptyAccess {
    pub(crate) const fn new(container: &'static str, accessor: &'static str) -> Self {
        Self {
            container,
            accessor,
        }
    }

    /// Panics with this error's message.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

impl fmt::Display for EmptyAccess {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "EmptyAccess: called `{}::{}()` on a value without that slot",
            self.container, self.accessor
        )
    }
}

impl std::error::Error for EmptyAccess {}
