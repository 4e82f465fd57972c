//! Column-major dense matrix storage

use mtx_core::{ErrorKind, Format, MarketElement, MatrixSink, MatrixSource, Shape, TypeDescriptor};

/// Dense matrix stored in column-major order, written in array format
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: MarketElement> DenseMatrix<T> {
    /// Zero-filled matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Matrix over existing column-major data
    ///
    /// Fails with `InputScanError` when `data` does not hold exactly
    /// `rows * cols` values.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<T>) -> mtx_core::Result<Self> {
        if Shape::array(rows, cols).cells()? != data.len() {
            return Err(ErrorKind::InputScanError);
        }
        Ok(Self { rows, cols, data })
    }

    /// Matrix filled from `f(row, col)`
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(col * self.rows + row).copied()
    }

    /// Set a value; returns false when the position is out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.data[col * self.rows + row] = value;
        true
    }

    /// Values in column-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T: MarketElement> MatrixSink for DenseMatrix<T> {
    type Element = T;

    fn reserve(&mut self, _descriptor: &TypeDescriptor, shape: &Shape) -> mtx_core::Result<()> {
        let cells = shape.cells()?;
        self.rows = shape.rows;
        self.cols = shape.cols;
        self.data.clear();
        self.data
            .try_reserve_exact(cells)
            .map_err(|_| ErrorKind::InputScanError)?;
        self.data.resize(cells, T::zero());
        Ok(())
    }

    fn set_element(&mut self, row: usize, col: usize, value: T) {
        self.set(row, col, value);
    }
}

impl<T: MarketElement> MatrixSource for DenseMatrix<T> {
    type Element = T;

    fn format(&self) -> Format {
        Format::Array
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, usize, T)> + '_> {
        let rows = self.rows.max(1);
        Box::new(
            self.data
                .iter()
                .enumerate()
                .map(move |(k, &v)| (k % rows, k / rows, v)),
        )
    }
}
