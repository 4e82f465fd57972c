//! Symmetry expansion
//!
//! Maps each decoded data line to the matrix cell(s) it fills. Array files list
//! stored cells in column-major order restricted to the stored triangle, so a
//! linear counter is advanced past the cells the file omits. Coordinate files
//! carry explicit positions. In both cases an off-diagonal entry of a
//! symmetric, skew-symmetric or Hermitian matrix also fills its mirror cell.

use crate::element::DecodedLine;
use crate::format::{Format, Shape, Symmetry};
use crate::validation::validate_coordinate;
use crate::value::Entry;
use crate::{ErrorKind, Result};

/// Companion entry implied by `symmetry`, if any
///
/// Diagonal entries are never mirrored.
pub fn mirror(symmetry: Symmetry, entry: &Entry) -> Option<Entry> {
    if entry.is_diagonal() {
        return None;
    }

    let value = match symmetry {
        Symmetry::General => return None,
        Symmetry::Symmetric => entry.value,
        Symmetry::SkewSymmetric => entry.value.negate(),
        Symmetry::Hermitian => entry.value.conj(),
    };

    Some(Entry::new(entry.col, entry.row, value))
}

/// Linear position counter over the stored cells of an array file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCursor {
    rows: usize,
    total: usize,
    symmetry: Symmetry,
    k: usize,
}

impl ArrayCursor {
    pub fn new(shape: &Shape, symmetry: Symmetry) -> Result<Self> {
        Ok(Self {
            rows: shape.rows,
            total: shape.cells()?,
            symmetry,
            k: 0,
        })
    }

    /// Whether linear position `k` is stored in the file
    fn is_stored(&self, k: usize) -> bool {
        let (row, col) = (k % self.rows, k / self.rows);
        match self.symmetry {
            Symmetry::General => true,
            Symmetry::Symmetric | Symmetry::Hermitian => row >= col,
            Symmetry::SkewSymmetric => row > col,
        }
    }

    /// Resolve the `(row, col)` of the next stored cell
    ///
    /// Fails once every cell of the grid has been consumed, which is how an
    /// excess data line is detected.
    pub fn advance(&mut self) -> Result<(usize, usize)> {
        if self.k >= self.total {
            return Err(ErrorKind::InputScanError);
        }

        while !self.is_stored(self.k) {
            self.k += 1;
            if self.k >= self.total {
                return Err(ErrorKind::InputScanError);
            }
        }

        let position = (self.k % self.rows, self.k / self.rows);
        self.k += 1;
        Ok(position)
    }

    /// Check that every stored cell was supplied
    pub fn finish(&self) -> Result<()> {
        let mut k = self.k;

        // The last column of a skew-symmetric matrix has no stored cells
        // (all of them are on or above the diagonal), so the counter stops
        // one column short.
        if self.symmetry == Symmetry::SkewSymmetric {
            k += self.rows;
        }

        if k != self.total {
            return Err(ErrorKind::InputScanError);
        }
        Ok(())
    }
}

/// Up to two entries produced by one data line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expansion {
    primary: Option<Entry>,
    mirror: Option<Entry>,
}

impl Iterator for Expansion {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.primary.take().or_else(|| self.mirror.take())
    }
}

/// Per-decode state turning decoded lines into matrix entries
#[derive(Debug, Clone)]
pub struct SymmetryExpander {
    shape: Shape,
    symmetry: Symmetry,
    cursor: Option<ArrayCursor>,
    lines: usize,
}

impl SymmetryExpander {
    pub fn new(format: Format, symmetry: Symmetry, shape: Shape) -> Result<Self> {
        let cursor = match format {
            Format::Array => Some(ArrayCursor::new(&shape, symmetry)?),
            Format::Coordinate => None,
        };

        Ok(Self {
            shape,
            symmetry,
            cursor,
            lines: 0,
        })
    }

    /// Number of data lines accepted so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Place one decoded line, returning the cells it fills
    pub fn expand(&mut self, line: DecodedLine) -> Result<Expansion> {
        let (row, col) = match (&mut self.cursor, line.coordinate) {
            (Some(cursor), None) => cursor.advance()?,
            (None, Some((row, col))) => {
                if self.lines >= self.shape.entries {
                    return Err(ErrorKind::InputScanError);
                }
                validate_coordinate(row, col, &self.shape)?;
                (row, col)
            }
            // line kind does not match the file format
            _ => return Err(ErrorKind::InputScanError),
        };

        self.lines += 1;

        let primary = Entry::new(row, col, line.value);
        Ok(Expansion {
            mirror: mirror(self.symmetry, &primary),
            primary: Some(primary),
        })
    }

    /// Validate the total number of data lines read
    pub fn finish(&self) -> Result<()> {
        match &self.cursor {
            Some(cursor) => cursor.finish(),
            None if self.lines == self.shape.entries => Ok(()),
            None => Err(ErrorKind::InputScanError),
        }
    }
}
