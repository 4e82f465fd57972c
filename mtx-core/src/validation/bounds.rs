//! Index bounds validation for decoded entries

use crate::format::Shape;
use crate::{ErrorKind, Result};

/// Validate a 0-based coordinate against the declared shape
pub const fn validate_coordinate(row: usize, col: usize, shape: &Shape) -> Result<()> {
    if row >= shape.rows || col >= shape.cols {
        return Err(ErrorKind::InputScanError);
    }
    Ok(())
}

/// Number of cells in a `rows` by `cols` grid, with overflow protection
pub const fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(n) => Ok(n),
        None => Err(ErrorKind::InputScanError),
    }
}
