//! Coordinate list sparse matrix storage

use hashbrown::HashMap;
use mtx_core::validation::validate_coordinate;
use mtx_core::{
    ErrorKind, Field, Format, MarketElement, MatrixSink, MatrixSource, Shape, TypeDescriptor,
};

/// Most entries reserved up front from a declared count
const RESERVE_LIMIT: usize = 1 << 20;

/// Sparse matrix of explicit `(row, col, value)` triplets, written in
/// coordinate format
///
/// Entries keep their insertion order. Setting a position that is already
/// stored replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, T)>,
    index: HashMap<(usize, usize), usize>,
    pattern: bool,
}

impl<T: MarketElement> CooMatrix<T> {
    /// Empty matrix of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
            index: HashMap::new(),
            pattern: false,
        }
    }

    /// Empty matrix whose stored values are written as pattern entries
    pub fn pattern(rows: usize, cols: usize) -> Self {
        Self {
            pattern: true,
            ..Self::new(rows, cols)
        }
    }

    /// Whether only positions, not values, are meaningful
    pub fn is_pattern(&self) -> bool {
        self.pattern
    }

    /// Store a value, replacing any earlier value at the same position
    ///
    /// Fails with `InputScanError` for positions outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> mtx_core::Result<()> {
        validate_coordinate(row, col, &Shape::coordinate(self.rows, self.cols, 0))?;
        self.insert(row, col, value);
        Ok(())
    }

    fn insert(&mut self, row: usize, col: usize, value: T) {
        match self.index.get(&(row, col)) {
            Some(&slot) => self.entries[slot].2 = value,
            None => {
                self.index.insert((row, col), self.entries.len());
                self.entries.push((row, col, value));
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index.get(&(row, col)).map(|&slot| self.entries[slot].2)
    }

    /// Stored triplets in insertion order
    pub fn triplets(&self) -> &[(usize, usize, T)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for CooMatrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            entries: Vec::new(),
            index: HashMap::new(),
            pattern: false,
        }
    }
}

impl<T: MarketElement> MatrixSink for CooMatrix<T> {
    type Element = T;

    fn reserve(&mut self, descriptor: &TypeDescriptor, shape: &Shape) -> mtx_core::Result<()> {
        self.rows = shape.rows;
        self.cols = shape.cols;
        self.pattern = descriptor.field == Field::Pattern;
        self.entries.clear();
        self.index.clear();

        // declared count is untrusted, storage grows as lines arrive
        let expected = shape
            .entries
            .min(shape.rows.saturating_mul(shape.cols))
            .min(RESERVE_LIMIT);
        self.entries
            .try_reserve(expected)
            .map_err(|_| ErrorKind::InputScanError)
    }

    fn set_element(&mut self, row: usize, col: usize, value: T) {
        self.insert(row, col, value);
    }
}

impl<T: MarketElement> MatrixSource for CooMatrix<T> {
    type Element = T;

    fn format(&self) -> Format {
        Format::Coordinate
    }

    fn field(&self) -> Field {
        if self.pattern {
            Field::Pattern
        } else {
            T::FIELD
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        Box::new(self.entries.iter().copied())
    }
}
