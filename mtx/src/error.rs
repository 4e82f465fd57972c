//! Error type for reading and writing Matrix Market text

use mtx_core::ErrorKind;
use thiserror::Error;

/// Errors raised by a decode or encode call
///
/// Every variant maps onto one [`ErrorKind`]; callers should match on
/// [`Error::kind`] rather than on the variant.
#[derive(Debug, Error)]
pub enum Error {
    /// A format failure detected at a specific 1-based input line
    #[error("{kind} at line {line}")]
    AtLine { kind: ErrorKind, line: usize },

    /// A format failure with no line to point at
    #[error("{0}")]
    Kind(ErrorKind),

    /// The underlying reader or writer failed
    #[error("{kind}: {source}")]
    Io {
        kind: ErrorKind,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn at_line(kind: ErrorKind, line: usize) -> Self {
        Error::AtLine { kind, line }
    }

    /// Wrap a failure of the input stream
    pub(crate) fn read(source: std::io::Error) -> Self {
        Error::Io {
            kind: ErrorKind::InputScanError,
            source,
        }
    }

    /// Wrap a failure of the output sink
    pub(crate) fn write(source: std::io::Error) -> Self {
        Error::Io {
            kind: ErrorKind::Unwritable,
            source,
        }
    }

    /// The closed error category of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AtLine { kind, .. } | Error::Io { kind, .. } => *kind,
            Error::Kind(kind) => *kind,
        }
    }

    /// Input line the failure was detected on, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Kind(kind)
    }
}

/// Result type for Matrix Market I/O
pub type Result<T> = std::result::Result<T, Error>;
