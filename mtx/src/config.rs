//! Configuration for Matrix Market reading and writing

use mtx_core::format::constants::DEFAULT_MAX_LINE_LENGTH;

/// Options shared by decode and encode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketConfig {
    /// Longest accepted input line in bytes, excluding the line terminator
    pub max_line_length: usize,
    /// Fractional digits for floats; `None` writes the shortest exact form
    pub precision: Option<usize>,
    /// Text of the comment line written after the banner of coordinate output
    pub comment: String,
}

impl MarketConfig {
    /// Set the maximum input line length
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Write floats with a fixed number of fractional digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the comment written to coordinate output
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            precision: None,
            comment: String::new(),
        }
    }
}
