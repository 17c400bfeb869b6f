//! Error types for skipindex.
//!
//! Lookups and deletes report absence through `Option`/`bool`; the only
//! errors are misuse of a [`RangeIter`](crate::RangeIter) cursor.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in skipindex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The cursor was read before its first successful `advance()`.
    #[error("iterator has not been advanced yet")]
    IteratorNotStarted,

    /// The cursor ran past its upper bound (or the end of the list).
    ///
    /// Exhaustion is sticky; the cursor never yields again.
    #[error("iterator is exhausted")]
    IteratorExhausted,
}
