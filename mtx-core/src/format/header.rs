//! Matrix Market banner definitions
//!
//! This module contains the typed header descriptor and the enums for each of
//! its four fields, plus parsing of the banner line.

use super::constants::{tokens, BANNER, BANNER_TOKENS};
use super::registry;
use crate::{ErrorKind, Result};

/// Kind of object described by the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Object {
    /// A two dimensional matrix
    Matrix,
}

/// Storage layout of the data section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// Dense, column-major, no explicit coordinates
    Array,
    /// Sparse, one explicit `row col` pair per line
    Coordinate,
}

/// Value kind of each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Real,
    Integer,
    Complex,
    /// Coordinates only, every stored value is one
    Pattern,
}

/// Structure used to omit half of the entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

macro_rules! header_token {
    ($ty:ident { $($variant:ident => $token:expr),+ $(,)? }) => {
        impl $ty {
            /// Parse a header token, ignoring ASCII case
            pub fn from_token(token: &str) -> Option<Self> {
                $(
                    if token.eq_ignore_ascii_case($token) {
                        return Some($ty::$variant);
                    }
                )+
                None
            }

            /// Canonical lowercase spelling
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $token,)+
                }
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

header_token!(Object { Matrix => tokens::MATRIX });
header_token!(Format { Array => tokens::ARRAY, Coordinate => tokens::COORDINATE });
header_token!(Field {
    Real => tokens::REAL,
    Integer => tokens::INTEGER,
    Complex => tokens::COMPLEX,
    Pattern => tokens::PATTERN,
});
header_token!(Symmetry {
    General => tokens::GENERAL,
    Symmetric => tokens::SYMMETRIC,
    SkewSymmetric => tokens::SKEW_SYMMETRIC,
    Hermitian => tokens::HERMITIAN,
});

/// The four header fields of a Matrix Market file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    pub object: Object,
    pub format: Format,
    pub field: Field,
    pub symmetry: Symmetry,
}

impl TypeDescriptor {
    /// Create a matrix descriptor
    pub const fn new(format: Format, field: Field, symmetry: Symmetry) -> Self {
        Self {
            object: Object::Matrix,
            format,
            field,
            symmetry,
        }
    }

    /// Position of this descriptor in the supported type table
    pub fn index(&self) -> Option<usize> {
        registry::lookup(self)
    }

    /// Whether this combination appears in the supported type table
    pub fn is_supported(&self) -> bool {
        self.index().is_some()
    }

    pub const fn is_array(&self) -> bool {
        matches!(self.format, Format::Array)
    }

    pub const fn is_coordinate(&self) -> bool {
        matches!(self.format, Format::Coordinate)
    }

    /// Parse and validate a banner line
    ///
    /// The first token must be the exact banner literal. The next four tokens
    /// are matched case-insensitively; anything after them is ignored.
    pub fn parse_banner(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some(BANNER) => {}
            _ => return Err(ErrorKind::NoHeader),
        }

        let mut fields = [""; BANNER_TOKENS - 1];
        for slot in fields.iter_mut() {
            *slot = parts.next().ok_or(ErrorKind::PrematureEof)?;
        }

        let descriptor = Self {
            object: Object::from_token(fields[0]).ok_or(ErrorKind::UnsupportedType)?,
            format: Format::from_token(fields[1]).ok_or(ErrorKind::UnsupportedType)?,
            field: Field::from_token(fields[2]).ok_or(ErrorKind::UnsupportedType)?,
            symmetry: Symmetry::from_token(fields[3]).ok_or(ErrorKind::UnsupportedType)?,
        };

        if !descriptor.is_supported() {
            return Err(ErrorKind::UnsupportedType);
        }

        Ok(descriptor)
    }
}

/// Renders the full banner line without the trailing newline
impl core::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            BANNER, self.object, self.format, self.field, self.symmetry
        )
    }
}
