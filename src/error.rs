//! Error types for Frostt operations.
//!
//! One enum covers the whole pipeline: resource errors while opening or
//! reading the file, format errors in the coordinate data, and the
//! degenerate-input case where density is undefined.

use std::fmt;

/// Result type alias for Frostt operations.
pub type Result<T> = std::result::Result<T, FrosttError>;

/// Main error type for Frostt operations.
///
/// # Examples
///
/// ```
/// use frostt::error::FrosttError;
///
/// let err = FrosttError::InvalidIndex {
///     line: 3,
///     token: "abc".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug)]
pub enum FrosttError {
    /// I/O error (file not found, permission denied, bad UTF-8, etc.).
    Io(std::io::Error),

    /// An index token could not be parsed as an integer.
    InvalidIndex {
        /// 1-based line number within the tensor file
        line: u64,
        /// The offending token
        token: String,
    },

    /// A record's token count disagrees with the established order.
    ///
    /// The first record fixes the tensor order; later records must match
    /// it or the per-dimension maxima would be computed against the wrong
    /// positions.
    OrderMismatch {
        /// 1-based line number within the tensor file
        line: u64,
        /// Order established by the first record (or an override)
        expected: usize,
        /// Order implied by this record's token count
        found: usize,
    },

    /// The stream produced no records and no dimensions were supplied,
    /// so density is undefined.
    DegenerateInput,
}

impl fmt::Display for FrosttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidIndex { line, token } => {
                write!(f, "line {line}: index token {token:?} is not an integer")
            }
            Self::OrderMismatch {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {line}: record has order {found}, expected {expected}"
                )
            }
            Self::DegenerateInput => {
                write!(
                    f,
                    "no non-zero entries and no dimensions supplied; density is undefined"
                )
            }
        }
    }
}

impl std::error::Error for FrosttError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FrosttError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
