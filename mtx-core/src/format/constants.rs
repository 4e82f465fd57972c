//! Format constants for the Matrix Market exchange format

/// Literal token that must open the first line of every file
pub const BANNER: &str = "%%MatrixMarket";

/// Lines starting with this character are comments (before the shape line)
pub const COMMENT_PREFIX: char = '%';

/// Default upper bound on a single input line, in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Number of whitespace separated tokens in a complete banner line
pub const BANNER_TOKENS: usize = 5;

/// Header token spellings
pub mod tokens {
    pub const MATRIX: &str = "matrix";

    pub const ARRAY: &str = "array";
    pub const COORDINATE: &str = "coordinate";

    pub const REAL: &str = "real";
    pub const INTEGER: &str = "integer";
    pub const COMPLEX: &str = "complex";
    pub const PATTERN: &str = "pattern";

    pub const GENERAL: &str = "general";
    pub const SYMMETRIC: &str = "symmetric";
    pub const SKEW_SYMMETRIC: &str = "skew-symmetric";
    pub const HERMITIAN: &str = "hermitian";
}
