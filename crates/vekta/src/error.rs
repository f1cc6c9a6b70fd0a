//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors reported by checked element access.
///
/// Out-of-range indexing through the unchecked operators is a caller bug
/// and panics; [`GrowVec::at`](crate::GrowVec::at) and
/// [`GrowVec::at_mut`](crate::GrowVec::at_mut) report the condition as a
/// value instead, so call sites can recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The requested index is not within the visible sequence.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// Length of the visible sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for AccessError {}
