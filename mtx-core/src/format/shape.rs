//! Dimension line of a Matrix Market file

use super::header::Format;
use crate::validation::{bounds::cell_count, parsing};
use crate::Result;

/// Matrix dimensions plus the number of explicit data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
    /// Declared count for coordinate files, `rows * cols` for array files
    pub entries: usize,
}

impl Shape {
    /// Shape of a dense array
    pub const fn array(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: rows.saturating_mul(cols),
        }
    }

    /// Shape of a coordinate matrix with `entries` explicit lines
    pub const fn coordinate(rows: usize, cols: usize, entries: usize) -> Self {
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Total number of cells
    pub const fn cells(&self) -> Result<usize> {
        cell_count(self.rows, self.cols)
    }

    /// Parse the dimension line for the given format
    ///
    /// Array lines carry `rows cols`, coordinate lines `rows cols entries`.
    /// Any other arity is an `InputScanError`.
    pub fn parse(line: &str, format: Format) -> Result<Self> {
        let tokens = line.split_whitespace();
        match format {
            Format::Array => {
                let [rows, cols] = parsing::take_exact::<2>(tokens)?;
                let rows = parsing::parse_count(rows)?;
                let cols = parsing::parse_count(cols)?;
                Ok(Self {
                    rows,
                    cols,
                    entries: cell_count(rows, cols)?,
                })
            }
            Format::Coordinate => {
                let [rows, cols, entries] = parsing::take_exact::<3>(tokens)?;
                Ok(Self::coordinate(
                    parsing::parse_count(rows)?,
                    parsing::parse_count(cols)?,
                    parsing::parse_count(entries)?,
                ))
            }
        }
    }
}
