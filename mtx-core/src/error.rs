//! Error kinds for Matrix Market operations

/// Closed set of failures that can abort a decode or encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// First line is present but does not start with the banner literal
    NoHeader,
    /// Banner has too few tokens, or the stream ended before the shape line
    PrematureEof,
    /// Header tokens do not name a supported type combination
    UnsupportedType,
    /// A shape or data line is malformed, or the entry count is wrong
    InputScanError,
    /// A line exceeds the configured maximum length
    LineTooLong,
    /// The output sink rejected a write
    Unwritable,
}

impl ErrorKind {
    /// Short human readable description
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoHeader => "missing matrix market header line",
            ErrorKind::PrematureEof => "required header items are missing",
            ErrorKind::UnsupportedType => "unrecognizable matrix description",
            ErrorKind::InputScanError => "error while scanning matrix input",
            ErrorKind::LineTooLong => "input line exceeds maximum length",
            ErrorKind::Unwritable => "error writing matrix to output",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ErrorKind {}

/// Result type for core format operations
pub type Result<T> = core::result::Result<T, ErrorKind>;
